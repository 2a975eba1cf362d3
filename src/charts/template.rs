//! Plot-area templates.
//!
//! A template is a declarative description of a plot area: layout, axis
//! settings and chart types. Building a template goes through the regular
//! [`PlotArea`] and [`Axis`] mutators, so secondary axes appear exactly as
//! they would when adding the chart types by hand, and string settings are
//! validated (or ignored) the same way.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "templates")]
//! # fn main() -> slidechart::common::Result<()> {
//! use slidechart::charts::PlotAreaTemplate;
//!
//! let template = PlotAreaTemplate::from_yaml_str(
//!     r#"
//! width: 0.8
//! axisX:
//!   title: Month
//! types:
//!   - line:
//!       common:
//!         onPrimaryAxis: false
//! "#,
//! )?;
//! let plot_area = template.build()?;
//! assert!(plot_area.secondary_axis_x().is_some());
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "templates"))]
//! # fn main() {}
//! ```

use serde::{Deserialize, Serialize};

use crate::charts::axis::Axis;
use crate::charts::chart_type::ChartType;
use crate::charts::gridlines::Gridlines;
use crate::charts::plot_area::PlotArea;
use crate::charts::types::{AxisCrosses, TickMark};
use crate::common::error::Result;
use crate::common::style::{Font, Outline};

/// Optional overrides for one axis. Unset fields keep the axis defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisSettings {
    /// Axis title
    pub title: Option<String>,
    /// `"category"` or `"value"`
    pub value_type: Option<String>,
    /// Title rotation in degrees (clamped to 0-360)
    pub title_rotation: Option<i32>,
    /// Number format code
    pub format_code: Option<String>,
    /// Tick label font
    pub font: Option<Font>,
    /// Axis line
    pub outline: Option<Outline>,
    /// Axis visibility
    pub visible: Option<bool>,
    /// Fixed minimum
    pub min_bounds: Option<i64>,
    /// Fixed maximum
    pub max_bounds: Option<i64>,
    /// Crossing point
    pub crosses_at: Option<AxisCrosses>,
    /// Reverse the axis orientation
    pub reversed_order: Option<bool>,
    /// Major tick mark style
    pub major_tick_mark: Option<TickMark>,
    /// Minor tick mark style
    pub minor_tick_mark: Option<TickMark>,
    /// `"nextTo"`, `"high"` or `"low"`; anything else is ignored
    pub tick_label_position: Option<String>,
    /// Major gridlines
    pub major_gridlines: Option<Gridlines>,
    /// Minor gridlines
    pub minor_gridlines: Option<Gridlines>,
    /// Major unit
    pub major_unit: Option<f64>,
    /// Minor unit
    pub minor_unit: Option<f64>,
}

impl AxisSettings {
    /// Apply the set fields to `axis`.
    pub fn apply(&self, axis: &mut Axis) -> Result<()> {
        if let Some(value_type) = &self.value_type {
            axis.set_value_type(Some(value_type))?;
        }
        if let Some(title) = &self.title {
            axis.set_title(title.as_str());
        }
        if let Some(degrees) = self.title_rotation {
            axis.set_title_rotation(degrees);
        }
        if let Some(format_code) = &self.format_code {
            axis.set_format_code(format_code.as_str());
        }
        if let Some(font) = &self.font {
            axis.set_font(font.clone());
        }
        if let Some(outline) = &self.outline {
            axis.set_outline(outline.clone());
        }
        if let Some(visible) = self.visible {
            axis.set_visible(visible);
        }
        if self.min_bounds.is_some() {
            axis.set_min_bounds(self.min_bounds);
        }
        if self.max_bounds.is_some() {
            axis.set_max_bounds(self.max_bounds);
        }
        if let Some(crosses_at) = self.crosses_at {
            axis.set_crosses_at(crosses_at);
        }
        if let Some(reversed_order) = self.reversed_order {
            axis.set_reversed_order(reversed_order);
        }
        if let Some(tick_mark) = self.major_tick_mark {
            axis.set_major_tick_mark(tick_mark);
        }
        if let Some(tick_mark) = self.minor_tick_mark {
            axis.set_minor_tick_mark(tick_mark);
        }
        if let Some(position) = &self.tick_label_position {
            axis.set_tick_label_position(position);
        }
        if self.major_gridlines.is_some() {
            axis.set_major_gridlines(self.major_gridlines.clone());
        }
        if self.minor_gridlines.is_some() {
            axis.set_minor_gridlines(self.minor_gridlines.clone());
        }
        if self.major_unit.is_some() {
            axis.set_major_unit(self.major_unit);
        }
        if self.minor_unit.is_some() {
            axis.set_minor_unit(self.minor_unit);
        }
        Ok(())
    }
}

/// Declarative plot-area description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotAreaTemplate {
    /// Horizontal offset (fraction of the chart width)
    pub offset_x: f64,
    /// Vertical offset (fraction of the chart height)
    pub offset_y: f64,
    /// Width (fraction of the chart width)
    pub width: f64,
    /// Height (fraction of the chart height)
    pub height: f64,
    /// Primary X axis overrides
    pub axis_x: AxisSettings,
    /// Primary Y axis overrides
    pub axis_y: AxisSettings,
    /// Secondary X axis overrides, used only if a chart type needs it
    pub secondary_axis_x: AxisSettings,
    /// Secondary Y axis overrides, used only if a chart type needs it
    pub secondary_axis_y: AxisSettings,
    /// Chart types, in insertion order
    pub types: Vec<ChartType>,
}

impl PlotAreaTemplate {
    /// Parse a template from YAML.
    #[cfg(feature = "templates")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| {
            crate::common::Error::Config(format!("Failed to parse plot area template: {}", e))
        })
    }

    /// Build a plot area from this template.
    pub fn build(&self) -> Result<PlotArea> {
        let mut plot_area = PlotArea::new();
        plot_area
            .set_offset_x(self.offset_x)
            .set_offset_y(self.offset_y)
            .set_width(self.width)
            .set_height(self.height);

        for chart_type in &self.types {
            let mut chart_type = chart_type.clone();
            chart_type.normalize();
            plot_area.add_type(chart_type);
        }

        self.axis_x.apply(plot_area.axis_x_mut())?;
        self.axis_y.apply(plot_area.axis_y_mut())?;
        if let Some(axis) = plot_area.secondary_axis_x_mut() {
            self.secondary_axis_x.apply(axis)?;
        }
        if let Some(axis) = plot_area.secondary_axis_y_mut() {
            self.secondary_axis_y.apply(axis)?;
        }
        Ok(plot_area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::chart_type::{BarType, LineType};
    use crate::charts::types::{AxisValueType, ChartKind, TickLabelPosition};
    use crate::common::error::Error;

    #[test]
    fn test_build_applies_layout_and_axes() {
        let template = PlotAreaTemplate {
            offset_x: 0.1,
            width: 0.8,
            axis_x: AxisSettings {
                title: Some("Month".into()),
                tick_label_position: Some("bogus".into()),
                major_gridlines: Some(Gridlines::new()),
                ..AxisSettings::default()
            },
            axis_y: AxisSettings {
                title_rotation: Some(-45),
                min_bounds: Some(0),
                ..AxisSettings::default()
            },
            types: vec![BarType::default().into()],
            ..PlotAreaTemplate::default()
        };

        let area = template.build().unwrap();
        assert_eq!(area.offset_x(), 0.1);
        assert_eq!(area.width(), 0.8);
        assert_eq!(area.axis_x().title(), "Month");
        assert_eq!(area.axis_x().tick_label_position(), TickLabelPosition::NextTo);
        assert!(area.axis_x().major_gridlines().is_some());
        assert_eq!(area.axis_y().title_rotation(), 0);
        assert_eq!(area.axis_y().min_bounds(), Some(0));
        assert!(area.secondary_axis_x().is_none());
    }

    #[test]
    fn test_build_creates_and_configures_secondary_axes() {
        let template = PlotAreaTemplate {
            secondary_axis_y: AxisSettings {
                title: Some("Share".into()),
                format_code: Some("0%".into()),
                ..AxisSettings::default()
            },
            types: vec![ChartType::from(LineType::new()).on_primary_axis(false)],
            ..PlotAreaTemplate::default()
        };

        let area = template.build().unwrap();
        assert_eq!(area.secondary_axis_y().map(Axis::title), Some("Share"));
        assert_eq!(area.secondary_axis_y().map(Axis::format_code), Some("0%"));
    }

    #[test]
    fn test_build_rejects_invalid_value_type() {
        let template = PlotAreaTemplate {
            axis_x: AxisSettings {
                value_type: Some("date".into()),
                ..AxisSettings::default()
            },
            ..PlotAreaTemplate::default()
        };
        assert_eq!(
            template.build().unwrap_err(),
            Error::invalid_parameter("axisValueType", "date")
        );
    }

    #[cfg(feature = "templates")]
    #[test]
    fn test_from_yaml_str() {
        let template = PlotAreaTemplate::from_yaml_str(
            r##"
offsetY: 0.05
height: 0.9
axisX:
  valueType: value
  tickLabelPosition: low
axisY:
  formatCode: "#,##0"
  majorTickMark: out
  crossesAt: max
types:
  - bar:
      direction: bar
      grouping: stacked
      gapWidth: 900
  - scatter:
      smooth: true
      common:
        onPrimaryAxis: false
"##,
        )
        .unwrap();

        let area = template.build().unwrap();
        assert_eq!(area.height(), 0.9);
        assert_eq!(area.axis_x().value_type(), AxisValueType::Value);
        assert_eq!(area.axis_x().tick_label_position(), TickLabelPosition::Low);
        assert_eq!(area.axis_y().format_code(), "#,##0");
        assert_eq!(area.axis_y().major_tick_mark(), TickMark::Out);
        assert_eq!(area.axis_y().crosses_at(), AxisCrosses::Max);

        assert_eq!(area.types().len(), 2);
        assert!(matches!(
            area.type_of(ChartKind::Bar),
            Some(ChartType::Bar(bar)) if bar.gap_width() == 500
        ));
        assert_eq!(
            area.secondary_axis_x().map(Axis::value_type),
            Some(AxisValueType::Value)
        );
    }

    #[cfg(feature = "templates")]
    #[test]
    fn test_from_yaml_str_keeps_font_scripts_exclusive() {
        let template = PlotAreaTemplate::from_yaml_str(
            "axisX:\n  font:\n    superscript: true\n    subscript: true\n",
        )
        .unwrap();

        let area = template.build().unwrap();
        let font = area.axis_x().font();
        assert!(font.is_superscript());
        assert!(!font.is_subscript());
    }

    #[cfg(feature = "templates")]
    #[test]
    fn test_from_yaml_str_reports_config_errors() {
        let err = PlotAreaTemplate::from_yaml_str("types: [ { bogus: {} } ]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
