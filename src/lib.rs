//! Slidechart - chart model for presentation documents
//!
//! This library provides the objects a presentation writer needs to describe
//! a chart: the plot area, its primary and secondary axes, the chart types
//! and series drawn in it, and the appearance records they reference.
//!
//! # Features
//!
//! - **Plot areas**: several chart types per chart, with secondary axes that
//!   appear and disappear as secondary-axis chart types come and go
//! - **Axes**: fixed axis IDs, validated string setters, clamped rotation,
//!   tick marks, gridlines, bounds and units
//! - **Style identity**: deterministic hash codes and a de-duplication
//!   registry for output writers
//! - **Templates**: plot areas described in YAML (`templates` feature)
//!
//! # Example - Building a plot area
//!
//! ```rust
//! use slidechart::charts::{AxisType, ChartType, PlotArea, ScatterType};
//!
//! let mut plot_area = PlotArea::new();
//! plot_area.add_type(ChartType::from(ScatterType::new()).on_primary_axis(false));
//!
//! assert!(plot_area.has_axis(false, AxisType::X));
//! let secondary_x = plot_area.secondary_axis_x().unwrap();
//! assert_eq!(secondary_x.crossed_id(), plot_area.secondary_axis_y().unwrap().id());
//! ```
//!
//! # Example - De-duplicating styles
//!
//! ```rust
//! use slidechart::charts::PlotArea;
//! use slidechart::common::{ComparableObject, HashTable};
//!
//! let mut first = PlotArea::new();
//! let mut second = PlotArea::new();
//!
//! let mut table = HashTable::new();
//! assert_eq!(table.add(&mut first), 0);
//! assert_eq!(table.add(&mut second), 0);
//! assert_eq!(second.hash_index(), Some(0));
//! ```

/// Shared error type, appearance records and style identity
pub mod common;

/// Chart axes, plot areas, chart types and series
pub mod charts;

// Re-export commonly used types for convenience
pub use charts::{Axis, ChartKind, ChartType, PlotArea};
pub use common::{ComparableObject, Error, HashTable, Result};
