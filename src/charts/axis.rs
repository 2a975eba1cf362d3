//! Chart axis model.
//!
//! A plot area owns up to four axes: the primary X/Y pair, which always
//! exists, and a secondary X/Y pair created on demand. An axis is identified
//! by its dimension and whether it belongs to the primary pair; that pair of
//! facts selects one of four fixed IDs, which is how the output format links
//! chart types to axes and axes to the axis they cross.

use tracing::trace;

use crate::charts::gridlines::Gridlines;
use crate::charts::types::{AxisCrosses, AxisType, AxisValueType, TickLabelPosition, TickMark};
use crate::common::error::Result;
use crate::common::hash::{ComparableObject, Fingerprint};
use crate::common::style::{Font, Outline};

/// ID of the primary X axis.
pub const AXIS_ID_PRIMARY_X: &str = "52743552";
/// ID of the primary Y axis.
pub const AXIS_ID_PRIMARY_Y: &str = "52749440";
/// ID of the secondary X axis.
pub const AXIS_ID_SECONDARY_X: &str = "52743560";
/// ID of the secondary Y axis.
pub const AXIS_ID_SECONDARY_Y: &str = "52749448";

/// Default axis title.
pub const DEFAULT_AXIS_TITLE: &str = "Axis Title";

/// Largest accepted title rotation, in degrees.
const MAX_TITLE_ROTATION: i32 = 360;

/// Look up the fixed ID for an axis.
#[inline]
pub const fn axis_id(primary: bool, axis_type: AxisType) -> &'static str {
    match (primary, axis_type) {
        (true, AxisType::X) => AXIS_ID_PRIMARY_X,
        (true, AxisType::Y) => AXIS_ID_PRIMARY_Y,
        (false, AxisType::X) => AXIS_ID_SECONDARY_X,
        (false, AxisType::Y) => AXIS_ID_SECONDARY_Y,
    }
}

/// A chart axis.
#[derive(Debug, Clone)]
pub struct Axis {
    axis_type: AxisType,
    primary: bool,
    value_type: AxisValueType,
    title: String,
    title_rotation: u32,
    format_code: String,
    font: Font,
    outline: Outline,
    visible: bool,
    min_bounds: Option<i64>,
    max_bounds: Option<i64>,
    crosses_at: AxisCrosses,
    reversed_order: bool,
    major_tick_mark: TickMark,
    minor_tick_mark: TickMark,
    tick_label_position: TickLabelPosition,
    major_gridlines: Option<Gridlines>,
    minor_gridlines: Option<Gridlines>,
    major_unit: Option<f64>,
    minor_unit: Option<f64>,
    hash_index: Option<usize>,
}

impl Axis {
    /// Create a new axis with default appearance.
    pub fn new(axis_type: AxisType, value_type: AxisValueType, primary: bool) -> Self {
        Self {
            axis_type,
            primary,
            value_type,
            title: DEFAULT_AXIS_TITLE.to_string(),
            title_rotation: 0,
            format_code: String::new(),
            font: Font::new(),
            outline: Outline::new(),
            visible: true,
            min_bounds: None,
            max_bounds: None,
            crosses_at: AxisCrosses::AutoZero,
            reversed_order: false,
            major_tick_mark: TickMark::None,
            minor_tick_mark: TickMark::None,
            tick_label_position: TickLabelPosition::NextTo,
            major_gridlines: None,
            minor_gridlines: None,
            major_unit: None,
            minor_unit: None,
            hash_index: None,
        }
    }

    /// ID of this axis, from the fixed four-entry table.
    #[inline]
    pub fn id(&self) -> &'static str {
        axis_id(self.primary, self.axis_type)
    }

    /// ID of the perpendicular axis in the same (primary or secondary) pair.
    #[inline]
    pub fn crossed_id(&self) -> &'static str {
        axis_id(self.primary, self.axis_type.perpendicular())
    }

    /// Axis dimension.
    #[inline]
    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    /// Set the axis dimension from its string form (`"x"` or `"y"`).
    ///
    /// `None` selects `"x"`. Any other string is rejected with
    /// [`Error::InvalidParameter`](crate::common::Error::InvalidParameter).
    pub fn set_type(&mut self, value: Option<&str>) -> Result<&mut Self> {
        let axis_type = match value {
            Some(value) => value.parse()?,
            None => AxisType::default(),
        };
        self.axis_type = axis_type;
        Ok(self)
    }

    /// Set the axis dimension.
    #[inline]
    pub fn set_axis_type(&mut self, axis_type: AxisType) -> &mut Self {
        self.axis_type = axis_type;
        self
    }

    /// Whether this axis belongs to the primary pair.
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Move this axis to the primary or secondary pair.
    #[inline]
    pub fn set_primary(&mut self, primary: bool) -> &mut Self {
        self.primary = primary;
        self
    }

    /// Category or value axis.
    #[inline]
    pub fn value_type(&self) -> AxisValueType {
        self.value_type
    }

    /// Set the value type from its string form (`"category"` or `"value"`).
    ///
    /// `None` selects `"category"`. Any other string is rejected with
    /// [`Error::InvalidParameter`](crate::common::Error::InvalidParameter).
    pub fn set_value_type(&mut self, value: Option<&str>) -> Result<&mut Self> {
        let value_type = match value {
            Some(value) => value.parse()?,
            None => AxisValueType::default(),
        };
        self.value_type = value_type;
        Ok(self)
    }

    /// Set the value type.
    #[inline]
    pub fn set_axis_value_type(&mut self, value_type: AxisValueType) -> &mut Self {
        self.value_type = value_type;
        self
    }

    /// Axis title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the axis title.
    #[inline]
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Title rotation in degrees, within `0..=360`.
    #[inline]
    pub fn title_rotation(&self) -> u32 {
        self.title_rotation
    }

    /// Set the title rotation. Out-of-range values are clamped to `0..=360`.
    #[inline]
    pub fn set_title_rotation(&mut self, degrees: i32) -> &mut Self {
        self.title_rotation = degrees.clamp(0, MAX_TITLE_ROTATION).unsigned_abs();
        self
    }

    /// Number format code for tick labels. Empty means general.
    #[inline]
    pub fn format_code(&self) -> &str {
        &self.format_code
    }

    /// Set the number format code.
    #[inline]
    pub fn set_format_code(&mut self, format_code: impl Into<String>) -> &mut Self {
        self.format_code = format_code.into();
        self
    }

    /// Tick label font.
    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Mutable tick label font.
    #[inline]
    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Replace the tick label font.
    #[inline]
    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.font = font;
        self
    }

    /// Axis line style.
    #[inline]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Mutable axis line style.
    #[inline]
    pub fn outline_mut(&mut self) -> &mut Outline {
        &mut self.outline
    }

    /// Replace the axis line style.
    #[inline]
    pub fn set_outline(&mut self, outline: Outline) -> &mut Self {
        self.outline = outline;
        self
    }

    /// Whether the axis is drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the axis.
    #[inline]
    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.visible = visible;
        self
    }

    /// Fixed minimum, if any.
    #[inline]
    pub fn min_bounds(&self) -> Option<i64> {
        self.min_bounds
    }

    /// Set or clear the fixed minimum.
    #[inline]
    pub fn set_min_bounds(&mut self, min_bounds: Option<i64>) -> &mut Self {
        self.min_bounds = min_bounds;
        self
    }

    /// Fixed maximum, if any.
    #[inline]
    pub fn max_bounds(&self) -> Option<i64> {
        self.max_bounds
    }

    /// Set or clear the fixed maximum.
    #[inline]
    pub fn set_max_bounds(&mut self, max_bounds: Option<i64>) -> &mut Self {
        self.max_bounds = max_bounds;
        self
    }

    /// Where this axis crosses the perpendicular one.
    #[inline]
    pub fn crosses_at(&self) -> AxisCrosses {
        self.crosses_at
    }

    /// Set the crossing point.
    #[inline]
    pub fn set_crosses_at(&mut self, crosses_at: AxisCrosses) -> &mut Self {
        self.crosses_at = crosses_at;
        self
    }

    /// Whether values run max to min.
    #[inline]
    pub fn is_reversed_order(&self) -> bool {
        self.reversed_order
    }

    /// Reverse the axis orientation.
    #[inline]
    pub fn set_reversed_order(&mut self, reversed_order: bool) -> &mut Self {
        self.reversed_order = reversed_order;
        self
    }

    /// Major tick mark style.
    #[inline]
    pub fn major_tick_mark(&self) -> TickMark {
        self.major_tick_mark
    }

    /// Set the major tick mark style.
    #[inline]
    pub fn set_major_tick_mark(&mut self, tick_mark: TickMark) -> &mut Self {
        self.major_tick_mark = tick_mark;
        self
    }

    /// Minor tick mark style.
    #[inline]
    pub fn minor_tick_mark(&self) -> TickMark {
        self.minor_tick_mark
    }

    /// Set the minor tick mark style.
    #[inline]
    pub fn set_minor_tick_mark(&mut self, tick_mark: TickMark) -> &mut Self {
        self.minor_tick_mark = tick_mark;
        self
    }

    /// Tick label position.
    #[inline]
    pub fn tick_label_position(&self) -> TickLabelPosition {
        self.tick_label_position
    }

    /// Set the tick label position from its string form
    /// (`"nextTo"`, `"high"` or `"low"`).
    ///
    /// Unknown values leave the current position untouched and are not
    /// reported, unlike [`Axis::set_type`] and [`Axis::set_value_type`].
    pub fn set_tick_label_position(&mut self, value: &str) -> &mut Self {
        match value.parse::<TickLabelPosition>() {
            Ok(position) => self.tick_label_position = position,
            Err(_) => trace!(value, axis = self.id(), "ignored tick label position"),
        }
        self
    }

    /// Major gridlines, if shown.
    #[inline]
    pub fn major_gridlines(&self) -> Option<&Gridlines> {
        self.major_gridlines.as_ref()
    }

    /// Mutable major gridlines, if shown.
    #[inline]
    pub fn major_gridlines_mut(&mut self) -> Option<&mut Gridlines> {
        self.major_gridlines.as_mut()
    }

    /// Show (`Some`) or hide (`None`) major gridlines.
    #[inline]
    pub fn set_major_gridlines(&mut self, gridlines: Option<Gridlines>) -> &mut Self {
        self.major_gridlines = gridlines;
        self
    }

    /// Minor gridlines, if shown.
    #[inline]
    pub fn minor_gridlines(&self) -> Option<&Gridlines> {
        self.minor_gridlines.as_ref()
    }

    /// Mutable minor gridlines, if shown.
    #[inline]
    pub fn minor_gridlines_mut(&mut self) -> Option<&mut Gridlines> {
        self.minor_gridlines.as_mut()
    }

    /// Show (`Some`) or hide (`None`) minor gridlines.
    #[inline]
    pub fn set_minor_gridlines(&mut self, gridlines: Option<Gridlines>) -> &mut Self {
        self.minor_gridlines = gridlines;
        self
    }

    /// Distance between major ticks, if fixed.
    #[inline]
    pub fn major_unit(&self) -> Option<f64> {
        self.major_unit
    }

    /// Set or clear the major unit.
    #[inline]
    pub fn set_major_unit(&mut self, unit: Option<f64>) -> &mut Self {
        self.major_unit = unit;
        self
    }

    /// Distance between minor ticks, if fixed.
    #[inline]
    pub fn minor_unit(&self) -> Option<f64> {
        self.minor_unit
    }

    /// Set or clear the minor unit.
    #[inline]
    pub fn set_minor_unit(&mut self, unit: Option<f64>) -> &mut Self {
        self.minor_unit = unit;
        self
    }
}

impl Default for Axis {
    #[inline]
    fn default() -> Self {
        Self::new(AxisType::X, AxisValueType::Category, true)
    }
}

impl ComparableObject for Axis {
    /// Fingerprint of the title and format code.
    fn hash_code(&self) -> String {
        Fingerprint::new()
            .part(&self.title)
            .part(&self.format_code)
            .part("Axis")
            .finish()
    }

    #[inline]
    fn hash_index(&self) -> Option<usize> {
        self.hash_index
    }

    #[inline]
    fn set_hash_index(&mut self, index: Option<usize>) {
        self.hash_index = index;
    }
}
