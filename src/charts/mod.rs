//! Chart model for presentation documents.
//!
//! This module provides the objects a chart shape is built from:
//!
//! - [`PlotArea`]: chart types, axes and layout of one chart
//! - [`Axis`]: primary or secondary X/Y axis settings
//! - [`ChartType`]: the series drawn with one kind of chart
//! - [`Series`] and [`Gridlines`]
//! - [`PlotAreaTemplate`]: declarative plot-area descriptions
//!
//! Every style-bearing object implements
//! [`ComparableObject`](crate::common::ComparableObject) so a writer can
//! de-duplicate styles with a [`HashTable`](crate::common::HashTable).
//!
//! # Example
//!
//! ```rust
//! use slidechart::charts::{BarType, ChartKind, ChartType, LineType, PlotArea, Series};
//! use slidechart::common::ComparableObject;
//!
//! let mut bars = BarType::default();
//! bars.common.series.push(Series::with_values("Revenue", [("Q1", 10.0), ("Q2", 14.0)]));
//!
//! let mut growth = ChartType::from(LineType::new()).on_primary_axis(false);
//! growth.add_series(Series::with_values("Growth", [("Q1", 0.1), ("Q2", 0.4)]));
//!
//! let mut plot_area = PlotArea::new();
//! plot_area.add_type(bars).add_type(growth);
//! plot_area.axis_y_mut().set_title("EUR");
//!
//! // The line chart needs the secondary axes, so both now exist.
//! assert!(plot_area.secondary_axis_x().is_some());
//! assert!(plot_area.secondary_axis_y().is_some());
//!
//! plot_area.remove_type(ChartKind::Line);
//! assert!(plot_area.secondary_axis_y().is_none());
//!
//! let fingerprint = plot_area.hash_code();
//! assert_eq!(fingerprint, plot_area.clone().hash_code());
//! ```

pub mod axis;
pub mod chart_type;
pub mod gridlines;
pub mod plot_area;
pub mod series;
pub mod template;
pub mod types;

pub use axis::Axis;
pub use chart_type::{
    AreaType, Bar3DType, BarType, BubbleType, ChartType, DoughnutType, LineType, Pie3DType,
    PieType, RadarType, ScatterType, TypeCommon,
};
pub use gridlines::Gridlines;
pub use plot_area::PlotArea;
pub use series::{DataLabels, Series};
pub use template::{AxisSettings, PlotAreaTemplate};
pub use types::{
    AxisCrosses, AxisType, AxisValueType, BarDirection, BarGrouping, BarShape, ChartKind,
    DataLabelPosition, RadarStyle, TickLabelPosition, TickMark,
};
