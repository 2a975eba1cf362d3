//! Chart type models.
//!
//! A chart type groups the series drawn with one kind of chart (bars, lines,
//! pie slices, ...). A plot area holds at most one chart type per
//! [`ChartKind`]; the kind tag is the collection key.

use serde::{Deserialize, Serialize};

use crate::charts::series::Series;
use crate::charts::types::{BarDirection, BarGrouping, BarShape, ChartKind, RadarStyle};
use crate::common::hash::{ComparableObject, Fingerprint};

/// Default bar gap width, in percent of the bar width.
pub const DEFAULT_GAP_WIDTH: u16 = 150;
/// Default 3D bar gap depth, in percent.
pub const DEFAULT_GAP_DEPTH: u16 = 150;
/// Default doughnut hole size, in percent.
pub const DEFAULT_HOLE_SIZE: u8 = 50;
/// Default bubble scale, in percent.
pub const DEFAULT_BUBBLE_SCALE: u16 = 100;

/// Properties shared by all chart types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeCommon {
    /// Series in this chart type
    pub series: Vec<Series>,
    /// Plot against the primary axes (`false`: secondary axes)
    pub on_primary_axis: bool,
    #[serde(skip)]
    hash_index: Option<usize>,
}

impl TypeCommon {
    /// Create new common properties on the primary axes.
    #[inline]
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            on_primary_axis: true,
            hash_index: None,
        }
    }

    fn fingerprint(&self) -> Fingerprint {
        let mut fingerprint = Fingerprint::new()
            .flag(self.on_primary_axis)
            .int(self.series.len());
        for series in &self.series {
            fingerprint = fingerprint.part(&series.hash_code());
        }
        fingerprint
    }
}

impl PartialEq for TypeCommon {
    fn eq(&self, other: &Self) -> bool {
        self.series == other.series
            && self.on_primary_axis == other.on_primary_axis
    }
}

impl Default for TypeCommon {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Area chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaType {
    /// Common properties
    pub common: TypeCommon,
}

impl AreaType {
    /// Create a new area chart type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bar/column chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarType {
    /// Common properties
    pub common: TypeCommon,
    /// Bar direction
    pub direction: BarDirection,
    /// Grouping type
    pub grouping: BarGrouping,
    gap_width: u16,
    overlap: i8,
}

impl BarType {
    /// Create a new bar chart type.
    #[inline]
    pub fn new(direction: BarDirection, grouping: BarGrouping) -> Self {
        Self {
            common: TypeCommon::new(),
            direction,
            grouping,
            gap_width: DEFAULT_GAP_WIDTH,
            overlap: 0,
        }
    }

    /// Gap between bar clusters (0-500%).
    #[inline]
    pub fn gap_width(&self) -> u16 {
        self.gap_width
    }

    /// Set the gap width, clamped to 0-500%.
    #[inline]
    pub fn set_gap_width(&mut self, percent: i32) -> &mut Self {
        self.gap_width = clamp_u16(percent, 0, 500);
        self
    }

    /// Overlap of bars in a cluster (-100% to 100%).
    #[inline]
    pub fn overlap(&self) -> i8 {
        self.overlap
    }

    /// Set the overlap, clamped to -100..=100%.
    #[inline]
    pub fn set_overlap(&mut self, percent: i32) -> &mut Self {
        self.overlap = i8::try_from(percent.clamp(-100, 100)).unwrap_or_default();
        self
    }
}

impl Default for BarType {
    #[inline]
    fn default() -> Self {
        Self::new(BarDirection::Column, BarGrouping::Clustered)
    }
}

/// 3D bar/column chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bar3DType {
    /// Common properties
    pub common: TypeCommon,
    /// Bar direction
    pub direction: BarDirection,
    /// Grouping type
    pub grouping: BarGrouping,
    /// Shape type
    pub shape: BarShape,
    gap_width: u16,
    gap_depth: u16,
}

impl Bar3DType {
    /// Create a new 3D bar chart type.
    #[inline]
    pub fn new(direction: BarDirection, grouping: BarGrouping) -> Self {
        Self {
            common: TypeCommon::new(),
            direction,
            grouping,
            shape: BarShape::Box,
            gap_width: DEFAULT_GAP_WIDTH,
            gap_depth: DEFAULT_GAP_DEPTH,
        }
    }

    /// Gap between bar clusters (0-500%).
    #[inline]
    pub fn gap_width(&self) -> u16 {
        self.gap_width
    }

    /// Set the gap width, clamped to 0-500%.
    #[inline]
    pub fn set_gap_width(&mut self, percent: i32) -> &mut Self {
        self.gap_width = clamp_u16(percent, 0, 500);
        self
    }

    /// Gap between rows of bars (0-500%).
    #[inline]
    pub fn gap_depth(&self) -> u16 {
        self.gap_depth
    }

    /// Set the gap depth, clamped to 0-500%.
    #[inline]
    pub fn set_gap_depth(&mut self, percent: i32) -> &mut Self {
        self.gap_depth = clamp_u16(percent, 0, 500);
        self
    }
}

impl Default for Bar3DType {
    #[inline]
    fn default() -> Self {
        Self::new(BarDirection::Column, BarGrouping::Clustered)
    }
}

/// Bubble chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BubbleType {
    /// Common properties
    pub common: TypeCommon,
    /// Show bubbles in 3D
    pub bubble_3d: bool,
    /// Show negative bubbles
    pub show_negative_bubbles: bool,
    bubble_scale: u16,
}

impl BubbleType {
    /// Create a new bubble chart type.
    #[inline]
    pub fn new() -> Self {
        Self {
            common: TypeCommon::new(),
            bubble_3d: false,
            show_negative_bubbles: true,
            bubble_scale: DEFAULT_BUBBLE_SCALE,
        }
    }

    /// Bubble size scale (0-300%).
    #[inline]
    pub fn bubble_scale(&self) -> u16 {
        self.bubble_scale
    }

    /// Set the bubble scale, clamped to 0-300%.
    #[inline]
    pub fn set_bubble_scale(&mut self, percent: i32) -> &mut Self {
        self.bubble_scale = clamp_u16(percent, 0, 300);
        self
    }
}

impl Default for BubbleType {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Doughnut chart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DoughnutType {
    /// Common properties
    pub common: TypeCommon,
    first_slice_angle: u16,
    hole_size: u8,
}

impl DoughnutType {
    /// Create a new doughnut chart type.
    #[inline]
    pub fn new() -> Self {
        Self {
            common: TypeCommon::new(),
            first_slice_angle: 0,
            hole_size: DEFAULT_HOLE_SIZE,
        }
    }

    /// Angle of the first slice (0-360 degrees).
    #[inline]
    pub fn first_slice_angle(&self) -> u16 {
        self.first_slice_angle
    }

    /// Set the first slice angle, clamped to 0-360 degrees.
    #[inline]
    pub fn set_first_slice_angle(&mut self, degrees: i32) -> &mut Self {
        self.first_slice_angle = clamp_u16(degrees, 0, 360);
        self
    }

    /// Hole size (10-90%).
    #[inline]
    pub fn hole_size(&self) -> u8 {
        self.hole_size
    }

    /// Set the hole size, clamped to 10-90%.
    #[inline]
    pub fn set_hole_size(&mut self, percent: i32) -> &mut Self {
        self.hole_size = u8::try_from(percent.clamp(10, 90)).unwrap_or(DEFAULT_HOLE_SIZE);
        self
    }
}

impl Default for DoughnutType {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Line chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineType {
    /// Common properties
    pub common: TypeCommon,
    /// Draw smoothed lines
    pub smooth: bool,
}

impl LineType {
    /// Create a new line chart type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pie chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieType {
    /// Common properties
    pub common: TypeCommon,
    /// Distance slices are pulled out of the pie, in percent of the radius
    pub explosion: u16,
    first_slice_angle: u16,
}

impl PieType {
    /// Create a new pie chart type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Angle of the first slice (0-360 degrees).
    #[inline]
    pub fn first_slice_angle(&self) -> u16 {
        self.first_slice_angle
    }

    /// Set the first slice angle, clamped to 0-360 degrees.
    #[inline]
    pub fn set_first_slice_angle(&mut self, degrees: i32) -> &mut Self {
        self.first_slice_angle = clamp_u16(degrees, 0, 360);
        self
    }
}

/// 3D pie chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pie3DType {
    /// Common properties
    pub common: TypeCommon,
    /// Distance slices are pulled out of the pie, in percent of the radius
    pub explosion: u16,
}

impl Pie3DType {
    /// Create a new 3D pie chart type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Radar chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadarType {
    /// Common properties
    pub common: TypeCommon,
    /// Radar style
    pub style: RadarStyle,
}

impl RadarType {
    /// Create a new radar chart type.
    #[inline]
    pub fn new(style: RadarStyle) -> Self {
        Self {
            common: TypeCommon::new(),
            style,
        }
    }
}

/// Scatter (XY) chart type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterType {
    /// Common properties
    pub common: TypeCommon,
    /// Draw smoothed lines
    pub smooth: bool,
}

impl ScatterType {
    /// Create a new scatter chart type.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A chart type of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    /// Area chart
    Area(AreaType),
    /// Bar chart
    Bar(BarType),
    /// Bar 3D chart
    #[serde(rename = "bar3D")]
    Bar3D(Bar3DType),
    /// Bubble chart
    Bubble(BubbleType),
    /// Doughnut chart
    Doughnut(DoughnutType),
    /// Line chart
    Line(LineType),
    /// Pie chart
    Pie(PieType),
    /// Pie 3D chart
    #[serde(rename = "pie3D")]
    Pie3D(Pie3DType),
    /// Radar chart
    Radar(RadarType),
    /// Scatter chart
    Scatter(ScatterType),
}

impl ChartType {
    /// Kind tag of this chart type.
    #[inline]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Area(_) => ChartKind::Area,
            Self::Bar(_) => ChartKind::Bar,
            Self::Bar3D(_) => ChartKind::Bar3D,
            Self::Bubble(_) => ChartKind::Bubble,
            Self::Doughnut(_) => ChartKind::Doughnut,
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
            Self::Pie3D(_) => ChartKind::Pie3D,
            Self::Radar(_) => ChartKind::Radar,
            Self::Scatter(_) => ChartKind::Scatter,
        }
    }

    /// Get the common properties.
    #[inline]
    pub fn common(&self) -> &TypeCommon {
        match self {
            Self::Area(t) => &t.common,
            Self::Bar(t) => &t.common,
            Self::Bar3D(t) => &t.common,
            Self::Bubble(t) => &t.common,
            Self::Doughnut(t) => &t.common,
            Self::Line(t) => &t.common,
            Self::Pie(t) => &t.common,
            Self::Pie3D(t) => &t.common,
            Self::Radar(t) => &t.common,
            Self::Scatter(t) => &t.common,
        }
    }

    /// Get mutable common properties.
    #[inline]
    pub fn common_mut(&mut self) -> &mut TypeCommon {
        match self {
            Self::Area(t) => &mut t.common,
            Self::Bar(t) => &mut t.common,
            Self::Bar3D(t) => &mut t.common,
            Self::Bubble(t) => &mut t.common,
            Self::Doughnut(t) => &mut t.common,
            Self::Line(t) => &mut t.common,
            Self::Pie(t) => &mut t.common,
            Self::Pie3D(t) => &mut t.common,
            Self::Radar(t) => &mut t.common,
            Self::Scatter(t) => &mut t.common,
        }
    }

    /// Series in this chart type.
    #[inline]
    pub fn series(&self) -> &[Series] {
        &self.common().series
    }

    /// Append a series.
    #[inline]
    pub fn add_series(&mut self, series: Series) -> &mut Self {
        self.common_mut().series.push(series);
        self
    }

    /// Whether the series are plotted against the primary axes.
    #[inline]
    pub fn is_on_primary_axis(&self) -> bool {
        self.common().on_primary_axis
    }

    /// Plot against the primary (`true`) or secondary (`false`) axes.
    #[inline]
    pub fn set_on_primary_axis(&mut self, on_primary_axis: bool) -> &mut Self {
        self.common_mut().on_primary_axis = on_primary_axis;
        self
    }

    /// Builder form of [`ChartType::set_on_primary_axis`].
    #[inline]
    pub fn on_primary_axis(mut self, on_primary_axis: bool) -> Self {
        self.set_on_primary_axis(on_primary_axis);
        self
    }

    /// Whether this chart type draws against an X axis.
    #[inline]
    pub fn has_axis_x(&self) -> bool {
        !self.kind().is_pie_like()
    }

    /// Whether this chart type draws against a Y axis.
    #[inline]
    pub fn has_axis_y(&self) -> bool {
        !self.kind().is_pie_like()
    }

    /// Whether X values are numeric rather than categories.
    #[inline]
    pub fn is_scatter_like(&self) -> bool {
        self.kind().is_scatter_like()
    }

    /// Re-apply the range limits of every clamped option.
    ///
    /// Deserialized chart types bypass the setters; this brings them back
    /// into range.
    pub(crate) fn normalize(&mut self) {
        match self {
            Self::Bar(t) => {
                t.set_gap_width(i32::from(t.gap_width));
                t.set_overlap(i32::from(t.overlap));
            },
            Self::Bar3D(t) => {
                t.set_gap_width(i32::from(t.gap_width));
                t.set_gap_depth(i32::from(t.gap_depth));
            },
            Self::Bubble(t) => {
                t.set_bubble_scale(i32::from(t.bubble_scale));
            },
            Self::Doughnut(t) => {
                t.set_first_slice_angle(i32::from(t.first_slice_angle));
                t.set_hole_size(i32::from(t.hole_size));
            },
            Self::Pie(t) => {
                t.set_first_slice_angle(i32::from(t.first_slice_angle));
            },
            Self::Area(_) | Self::Line(_) | Self::Pie3D(_) | Self::Radar(_) | Self::Scatter(_) => {},
        }
    }

    fn options_fingerprint(&self, fingerprint: Fingerprint) -> Fingerprint {
        match self {
            Self::Area(_) => fingerprint,
            Self::Bar(t) => fingerprint
                .part(t.direction.xml_value())
                .part(t.grouping.xml_value())
                .int(t.gap_width)
                .int(t.overlap),
            Self::Bar3D(t) => fingerprint
                .part(t.direction.xml_value())
                .part(t.grouping.xml_value())
                .part(t.shape.xml_value())
                .int(t.gap_width)
                .int(t.gap_depth),
            Self::Bubble(t) => fingerprint
                .flag(t.bubble_3d)
                .flag(t.show_negative_bubbles)
                .int(t.bubble_scale),
            Self::Doughnut(t) => fingerprint.int(t.first_slice_angle).int(t.hole_size),
            Self::Line(t) => fingerprint.flag(t.smooth),
            Self::Pie(t) => fingerprint.int(t.explosion).int(t.first_slice_angle),
            Self::Pie3D(t) => fingerprint.int(t.explosion),
            Self::Radar(t) => fingerprint.part(t.style.xml_value()),
            Self::Scatter(t) => fingerprint.flag(t.smooth),
        }
    }
}

impl ComparableObject for ChartType {
    fn hash_code(&self) -> String {
        let fingerprint = self.common().fingerprint();
        self.options_fingerprint(fingerprint)
            .part(self.kind().name())
            .finish()
    }

    #[inline]
    fn hash_index(&self) -> Option<usize> {
        self.common().hash_index
    }

    #[inline]
    fn set_hash_index(&mut self, index: Option<usize>) {
        self.common_mut().hash_index = index;
    }
}

impl From<AreaType> for ChartType {
    fn from(value: AreaType) -> Self {
        Self::Area(value)
    }
}

impl From<BarType> for ChartType {
    fn from(value: BarType) -> Self {
        Self::Bar(value)
    }
}

impl From<Bar3DType> for ChartType {
    fn from(value: Bar3DType) -> Self {
        Self::Bar3D(value)
    }
}

impl From<BubbleType> for ChartType {
    fn from(value: BubbleType) -> Self {
        Self::Bubble(value)
    }
}

impl From<DoughnutType> for ChartType {
    fn from(value: DoughnutType) -> Self {
        Self::Doughnut(value)
    }
}

impl From<LineType> for ChartType {
    fn from(value: LineType) -> Self {
        Self::Line(value)
    }
}

impl From<PieType> for ChartType {
    fn from(value: PieType) -> Self {
        Self::Pie(value)
    }
}

impl From<Pie3DType> for ChartType {
    fn from(value: Pie3DType) -> Self {
        Self::Pie3D(value)
    }
}

impl From<RadarType> for ChartType {
    fn from(value: RadarType) -> Self {
        Self::Radar(value)
    }
}

impl From<ScatterType> for ChartType {
    fn from(value: ScatterType) -> Self {
        Self::Scatter(value)
    }
}

#[inline]
fn clamp_u16(value: i32, min: u16, max: u16) -> u16 {
    u16::try_from(value.clamp(i32::from(min), i32::from(max))).unwrap_or(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_usage_by_kind() {
        let pie: ChartType = PieType::new().into();
        let doughnut: ChartType = DoughnutType::new().into();
        let line: ChartType = LineType::new().into();
        assert!(!pie.has_axis_x() && !pie.has_axis_y());
        assert!(!doughnut.has_axis_x());
        assert!(line.has_axis_x() && line.has_axis_y());
    }

    #[test]
    fn test_on_primary_axis_default_and_builder() {
        let bar: ChartType = BarType::default().into();
        assert!(bar.is_on_primary_axis());
        let bar = bar.on_primary_axis(false);
        assert!(!bar.is_on_primary_axis());
    }

    #[test]
    fn test_clamped_options() {
        let mut bar = BarType::default();
        assert_eq!(bar.gap_width(), DEFAULT_GAP_WIDTH);
        assert_eq!(bar.set_gap_width(900).gap_width(), 500);
        assert_eq!(bar.set_gap_width(-5).gap_width(), 0);
        assert_eq!(bar.set_overlap(-250).overlap(), -100);
        assert_eq!(bar.set_overlap(40).overlap(), 40);

        let mut doughnut = DoughnutType::new();
        assert_eq!(doughnut.set_hole_size(5).hole_size(), 10);
        assert_eq!(doughnut.set_hole_size(95).hole_size(), 90);
        assert_eq!(doughnut.set_first_slice_angle(720).first_slice_angle(), 360);

        let mut bubble = BubbleType::new();
        assert_eq!(bubble.set_bubble_scale(1000).bubble_scale(), 300);
    }

    #[test]
    fn test_hash_includes_kind_series_and_options() {
        let line: ChartType = LineType::new().into();
        let scatter: ChartType = ScatterType::new().into();
        assert_ne!(line.hash_code(), scatter.hash_code());

        let mut with_series = line.clone();
        with_series.add_series(Series::with_values("A", [("x", 1.0)]));
        assert_ne!(line.hash_code(), with_series.hash_code());

        let mut smooth = LineType::new();
        smooth.smooth = true;
        assert_ne!(line.hash_code(), ChartType::from(smooth).hash_code());

        let secondary = line.clone().on_primary_axis(false);
        assert_ne!(line.hash_code(), secondary.hash_code());
    }

    #[test]
    fn test_hash_index_lives_on_common() {
        let mut bar: ChartType = BarType::default().into();
        bar.set_hash_index(Some(7));
        assert_eq!(bar.hash_index(), Some(7));
        assert_eq!(bar.hash_code(), ChartType::from(BarType::default()).hash_code());
    }

    #[test]
    fn test_equality_ignores_hash_index() {
        let mut stamped: ChartType = LineType::new().into();
        stamped.add_series(Series::new("Revenue"));
        stamped.set_hash_index(Some(2));
        if let ChartType::Line(line) = &mut stamped {
            line.common.series[0].set_hash_index(Some(5));
        }

        let mut fresh: ChartType = LineType::new().into();
        fresh.add_series(Series::new("Revenue"));
        assert_eq!(stamped, fresh);
    }
}
