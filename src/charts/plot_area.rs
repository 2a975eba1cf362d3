//! Chart plot area model.
//!
//! The plot area holds the chart types drawn in a chart and the axes they
//! are drawn against. The primary X/Y axes always exist. The secondary pair
//! exists exactly while at least one chart type is plotted on the secondary
//! axes; it is created when the first such type is added and dropped when
//! the last one goes away. The pair is stored as a unit so that one
//! secondary axis can never exist without the other.

use smallvec::SmallVec;
use tracing::debug;

use crate::charts::axis::Axis;
use crate::charts::chart_type::ChartType;
use crate::charts::types::{AxisType, AxisValueType, ChartKind};
use crate::common::error::{Error, Result};
use crate::common::hash::{ComparableObject, Fingerprint};

/// Secondary X/Y axes, present or absent together.
#[derive(Debug, Clone)]
struct SecondaryAxes {
    x: Axis,
    y: Axis,
}

impl SecondaryAxes {
    fn for_type(chart_type: &ChartType) -> Self {
        let x_value_type = if chart_type.is_scatter_like() {
            AxisValueType::Value
        } else {
            AxisValueType::Category
        };
        Self {
            x: Axis::new(AxisType::X, x_value_type, false),
            y: Axis::new(AxisType::Y, AxisValueType::Value, false),
        }
    }
}

/// Plot area containing chart types and axes.
///
/// Cloning produces an independent copy: axes and chart types are owned
/// values, so nothing is shared between a plot area and its clone.
#[derive(Debug, Clone)]
pub struct PlotArea {
    types: SmallVec<[ChartType; 2]>,
    axis_x: Axis,
    axis_y: Axis,
    secondary: Option<SecondaryAxes>,
    offset_x: f64,
    offset_y: f64,
    width: f64,
    height: f64,
    hash_index: Option<usize>,
}

impl PlotArea {
    /// Create an empty plot area with its primary axes.
    pub fn new() -> Self {
        Self {
            types: SmallVec::new(),
            axis_x: Axis::new(AxisType::X, AxisValueType::Category, true),
            axis_y: Axis::new(AxisType::Y, AxisValueType::Value, true),
            secondary: None,
            offset_x: 0.0,
            offset_y: 0.0,
            width: 0.0,
            height: 0.0,
            hash_index: None,
        }
    }

    /// Add a chart type, replacing any existing chart type of the same kind.
    ///
    /// A replaced chart type keeps its position in the collection. Adding the
    /// first chart type plotted on the secondary axes creates the secondary
    /// axis pair.
    pub fn add_type(&mut self, chart_type: impl Into<ChartType>) -> &mut Self {
        let chart_type = chart_type.into();
        let kind = chart_type.kind();

        if self.secondary.is_none() && !chart_type.is_on_primary_axis() {
            debug!(kind = kind.name(), "creating secondary axes");
            self.secondary = Some(SecondaryAxes::for_type(&chart_type));
        }

        match self.types.iter().position(|existing| existing.kind() == kind) {
            Some(position) => {
                debug!(kind = kind.name(), "replacing chart type");
                self.types[position] = chart_type;
                self.drop_unused_secondary_axes();
            },
            None => self.types.push(chart_type),
        }
        self
    }

    /// Remove the chart type of `kind`. Absent kinds are ignored.
    ///
    /// Removing the last chart type plotted on the secondary axes drops the
    /// secondary axis pair.
    pub fn remove_type(&mut self, kind: ChartKind) -> &mut Self {
        if let Some(position) = self.types.iter().position(|t| t.kind() == kind) {
            debug!(kind = kind.name(), "removing chart type");
            self.types.remove(position);
            self.drop_unused_secondary_axes();
        }
        self
    }

    fn drop_unused_secondary_axes(&mut self) {
        if self.secondary.is_some() && !self.has_secondary_axis() {
            debug!("dropping secondary axes");
            self.secondary = None;
        }
    }

    /// Chart types in insertion order.
    #[inline]
    pub fn types(&self) -> &[ChartType] {
        &self.types
    }

    /// Chart type of `kind`, if present.
    #[inline]
    pub fn type_of(&self, kind: ChartKind) -> Option<&ChartType> {
        self.types.iter().find(|t| t.kind() == kind)
    }

    /// Whether any chart type on the given axis pair uses that axis dimension.
    pub fn has_axis(&self, primary: bool, axis_type: AxisType) -> bool {
        self.types.iter().any(|t| {
            t.is_on_primary_axis() == primary
                && match axis_type {
                    AxisType::X => t.has_axis_x(),
                    AxisType::Y => t.has_axis_y(),
                }
        })
    }

    /// Whether any chart type is plotted on the secondary axes.
    #[inline]
    pub fn has_secondary_axis(&self) -> bool {
        self.types.iter().any(|t| !t.is_on_primary_axis())
    }

    /// First chart type.
    ///
    /// Fails with [`Error::UndefinedChartType`] when no chart type was added.
    #[deprecated(note = "a plot area can hold several chart types; use `types` or `type_of`")]
    pub fn chart_type(&self) -> Result<&ChartType> {
        self.types.first().ok_or(Error::UndefinedChartType)
    }

    /// Replace every chart type with `chart_type`.
    #[deprecated(note = "a plot area can hold several chart types; use `add_type`")]
    pub fn set_chart_type(&mut self, chart_type: impl Into<ChartType>) -> &mut Self {
        self.types.clear();
        self.secondary = None;
        self.add_type(chart_type)
    }

    /// Primary X axis.
    #[inline]
    pub fn axis_x(&self) -> &Axis {
        &self.axis_x
    }

    /// Mutable primary X axis.
    #[inline]
    pub fn axis_x_mut(&mut self) -> &mut Axis {
        &mut self.axis_x
    }

    /// Primary Y axis.
    #[inline]
    pub fn axis_y(&self) -> &Axis {
        &self.axis_y
    }

    /// Mutable primary Y axis.
    #[inline]
    pub fn axis_y_mut(&mut self) -> &mut Axis {
        &mut self.axis_y
    }

    /// Secondary X axis, while a chart type uses the secondary axes.
    #[inline]
    pub fn secondary_axis_x(&self) -> Option<&Axis> {
        self.secondary.as_ref().map(|s| &s.x)
    }

    /// Mutable secondary X axis.
    #[inline]
    pub fn secondary_axis_x_mut(&mut self) -> Option<&mut Axis> {
        self.secondary.as_mut().map(|s| &mut s.x)
    }

    /// Secondary Y axis, while a chart type uses the secondary axes.
    #[inline]
    pub fn secondary_axis_y(&self) -> Option<&Axis> {
        self.secondary.as_ref().map(|s| &s.y)
    }

    /// Mutable secondary Y axis.
    #[inline]
    pub fn secondary_axis_y_mut(&mut self) -> Option<&mut Axis> {
        self.secondary.as_mut().map(|s| &mut s.y)
    }

    /// Horizontal offset, as a fraction of the chart width.
    #[inline]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Set the horizontal offset.
    #[inline]
    pub fn set_offset_x(&mut self, value: f64) -> &mut Self {
        self.offset_x = value;
        self
    }

    /// Vertical offset, as a fraction of the chart height.
    #[inline]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Set the vertical offset.
    #[inline]
    pub fn set_offset_y(&mut self, value: f64) -> &mut Self {
        self.offset_y = value;
        self
    }

    /// Width, as a fraction of the chart width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the width.
    #[inline]
    pub fn set_width(&mut self, value: f64) -> &mut Self {
        self.width = value;
        self
    }

    /// Height, as a fraction of the chart height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the height.
    #[inline]
    pub fn set_height(&mut self, value: f64) -> &mut Self {
        self.height = value;
        self
    }
}

impl Default for PlotArea {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ComparableObject for PlotArea {
    fn hash_code(&self) -> String {
        let mut fingerprint = Fingerprint::new();
        for chart_type in &self.types {
            fingerprint = fingerprint.part(&chart_type.hash_code());
        }
        fingerprint
            .part(&self.axis_x.hash_code())
            .part(&self.axis_y.hash_code())
            .float(self.offset_x)
            .float(self.offset_y)
            .float(self.width)
            .float(self.height)
            .part("PlotArea")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::axis::{AXIS_ID_SECONDARY_X, AXIS_ID_SECONDARY_Y};
    use crate::charts::chart_type::{BarType, LineType, PieType, ScatterType};
    use crate::charts::series::Series;
    use crate::charts::types::{BarDirection, BarGrouping};
    use proptest::prelude::*;

    fn secondary_line() -> ChartType {
        ChartType::from(LineType::new()).on_primary_axis(false)
    }

    fn secondary_bar() -> ChartType {
        ChartType::from(BarType::new(BarDirection::Bar, BarGrouping::Stacked)).on_primary_axis(false)
    }

    fn secondary_pair_ptrs(area: &PlotArea) -> Option<(*const Axis, *const Axis)> {
        Some((area.secondary_axis_x()? as *const Axis, area.secondary_axis_y()? as *const Axis))
    }

    #[test]
    fn test_new_plot_area() {
        let area = PlotArea::new();
        assert!(area.types().is_empty());
        assert_eq!(area.axis_x().axis_type(), AxisType::X);
        assert_eq!(area.axis_x().value_type(), AxisValueType::Category);
        assert_eq!(area.axis_y().axis_type(), AxisType::Y);
        assert_eq!(area.axis_y().value_type(), AxisValueType::Value);
        assert!(area.axis_x().is_primary() && area.axis_y().is_primary());
        assert!(area.secondary_axis_x().is_none());
        assert!(area.secondary_axis_y().is_none());
        assert!(!area.has_secondary_axis());
    }

    #[test]
    fn test_primary_type_creates_no_secondary_axes() {
        let mut area = PlotArea::new();
        area.add_type(LineType::new());
        assert!(area.secondary_axis_x().is_none());
        assert!(!area.has_secondary_axis());
    }

    #[test]
    fn test_secondary_type_creates_both_axes() {
        let mut area = PlotArea::new();
        area.add_type(secondary_line());

        let x = area.secondary_axis_x().unwrap();
        let y = area.secondary_axis_y().unwrap();
        assert_eq!(x.id(), AXIS_ID_SECONDARY_X);
        assert_eq!(y.id(), AXIS_ID_SECONDARY_Y);
        assert_eq!(x.value_type(), AxisValueType::Category);
        assert_eq!(y.value_type(), AxisValueType::Value);
        assert!(area.has_secondary_axis());
    }

    #[test]
    fn test_scatter_secondary_x_axis_is_value_typed() {
        let mut area = PlotArea::new();
        area.add_type(ChartType::from(ScatterType::new()).on_primary_axis(false));
        assert_eq!(
            area.secondary_axis_x().map(Axis::value_type),
            Some(AxisValueType::Value)
        );
        assert_eq!(
            area.secondary_axis_y().map(Axis::value_type),
            Some(AxisValueType::Value)
        );
    }

    #[test]
    fn test_second_secondary_type_keeps_axes() {
        let mut area = PlotArea::new();
        area.add_type(secondary_line());
        area.secondary_axis_x_mut().unwrap().set_title("Right");
        let before = secondary_pair_ptrs(&area);

        area.add_type(secondary_bar());
        assert_eq!(secondary_pair_ptrs(&area), before);
        assert_eq!(area.secondary_axis_x().map(Axis::title), Some("Right"));
    }

    #[test]
    fn test_secondary_axes_survive_until_last_secondary_type_removed() {
        let mut area = PlotArea::new();
        area.add_type(secondary_line()).add_type(secondary_bar());

        area.remove_type(ChartKind::Line);
        assert!(area.secondary_axis_x().is_some());
        assert!(area.secondary_axis_y().is_some());
        assert!(area.has_secondary_axis());

        area.remove_type(ChartKind::Bar);
        assert!(area.secondary_axis_x().is_none());
        assert!(area.secondary_axis_y().is_none());
        assert!(!area.has_secondary_axis());
    }

    #[test]
    fn test_removing_primary_type_keeps_secondary_axes() {
        let mut area = PlotArea::new();
        area.add_type(LineType::new()).add_type(secondary_bar());
        area.remove_type(ChartKind::Line);
        assert!(area.secondary_axis_x().is_some());
    }

    #[test]
    fn test_remove_absent_kind_is_noop() {
        let mut area = PlotArea::new();
        area.add_type(secondary_line());
        area.remove_type(ChartKind::Radar);
        assert_eq!(area.types().len(), 1);
        assert!(area.secondary_axis_x().is_some());
    }

    #[test]
    fn test_add_type_replaces_same_kind_in_place() {
        let mut area = PlotArea::new();
        area.add_type(LineType::new()).add_type(PieType::new());

        let mut smooth = LineType::new();
        smooth.smooth = true;
        area.add_type(smooth);

        assert_eq!(area.types().len(), 2);
        assert_eq!(area.types()[0].kind(), ChartKind::Line);
        assert!(matches!(area.type_of(ChartKind::Line), Some(ChartType::Line(line)) if line.smooth));
    }

    #[test]
    fn test_replacing_last_secondary_type_with_primary_drops_axes() {
        let mut area = PlotArea::new();
        area.add_type(secondary_line());
        area.add_type(LineType::new());
        assert!(area.secondary_axis_x().is_none());
        assert!(!area.has_secondary_axis());
    }

    #[test]
    fn test_has_axis() {
        let mut area = PlotArea::new();
        area.add_type(PieType::new());
        assert!(!area.has_axis(true, AxisType::X));

        area.add_type(LineType::new());
        assert!(area.has_axis(true, AxisType::X));
        assert!(area.has_axis(true, AxisType::Y));
        assert!(!area.has_axis(false, AxisType::X));

        area.add_type(secondary_bar());
        assert!(area.has_axis(false, AxisType::Y));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_single_type_accessors() {
        let mut area = PlotArea::new();
        assert_eq!(area.chart_type().unwrap_err(), Error::UndefinedChartType);

        area.add_type(secondary_line()).add_type(PieType::new());
        assert_eq!(area.chart_type().map(ChartType::kind), Ok(ChartKind::Line));

        area.set_chart_type(BarType::default());
        assert_eq!(area.types().len(), 1);
        assert_eq!(area.chart_type().map(ChartType::kind), Ok(ChartKind::Bar));
        assert!(area.secondary_axis_x().is_none());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut area = PlotArea::new();
        area.add_type(secondary_line());
        area.secondary_axis_x_mut().unwrap().set_title("Original");

        let mut copy = area.clone();
        copy.secondary_axis_x_mut().unwrap().set_title("Copy");
        copy.axis_y_mut().set_title("Copy Y");
        copy.remove_type(ChartKind::Line);

        assert_eq!(area.secondary_axis_x().map(Axis::title), Some("Original"));
        assert_eq!(area.axis_y().title(), "Axis Title");
        assert_eq!(area.types().len(), 1);
        assert!(copy.secondary_axis_x().is_none());
    }

    #[test]
    fn test_hash_code_is_pure() {
        let build = || {
            let mut area = PlotArea::new();
            area.add_type(BarType::default())
                .set_offset_x(0.1)
                .set_offset_y(0.2)
                .set_width(0.7)
                .set_height(0.6);
            area
        };
        let a = build();
        let mut b = build();
        assert_eq!(a.hash_code(), b.hash_code());

        b.set_hash_index(Some(4));
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_code_tracks_each_input() {
        let mut base = PlotArea::new();
        base.add_type(BarType::default());
        let original = base.hash_code();

        let mutations: Vec<Box<dyn Fn(&mut PlotArea)>> = vec![
            Box::new(|a: &mut PlotArea| {
                a.set_offset_x(0.5);
            }),
            Box::new(|a: &mut PlotArea| {
                a.set_offset_y(0.5);
            }),
            Box::new(|a: &mut PlotArea| {
                a.set_width(0.5);
            }),
            Box::new(|a: &mut PlotArea| {
                a.set_height(0.5);
            }),
            Box::new(|a: &mut PlotArea| {
                a.axis_x_mut().set_title("X");
            }),
            Box::new(|a: &mut PlotArea| {
                a.axis_y_mut().set_format_code("0%");
            }),
            Box::new(|a: &mut PlotArea| {
                a.add_type(LineType::new());
            }),
            Box::new(|a: &mut PlotArea| {
                let mut bar = ChartType::from(BarType::default());
                bar.add_series(Series::new("S"));
                a.add_type(bar);
            }),
        ];

        for mutate in mutations {
            let mut area = base.clone();
            mutate(&mut area);
            assert_ne!(area.hash_code(), original);
        }
    }

    proptest! {
        #[test]
        fn prop_hash_depends_only_on_state(
            x in 0.0f64..1.0,
            y in 0.0f64..1.0,
            w in 0.0f64..1.0,
            h in 0.0f64..1.0,
            title in "[a-zA-Z ]{0,12}",
        ) {
            let build = || {
                let mut area = PlotArea::new();
                area.add_type(LineType::new())
                    .set_offset_x(x)
                    .set_offset_y(y)
                    .set_width(w)
                    .set_height(h);
                area.axis_x_mut().set_title(title.clone());
                area
            };
            prop_assert_eq!(build().hash_code(), build().hash_code());
        }
    }
}
