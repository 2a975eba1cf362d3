//! Core chart enumerations.
//!
//! This module defines chart kinds, axis identity and the enumerated axis
//! appearance settings. Every enumeration exposes its XML spelling through
//! `xml_value()` and parses or prints the same spelling through `FromStr`
//! and `Display`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};

/// Chart kind tag. One plot area holds at most one chart type per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Area chart (2D)
    Area,
    /// Bar/column chart (2D)
    Bar,
    /// Bar/column chart (3D)
    Bar3D,
    /// Bubble chart
    Bubble,
    /// Doughnut chart
    Doughnut,
    /// Line chart
    Line,
    /// Pie chart (2D)
    Pie,
    /// Pie chart (3D)
    Pie3D,
    /// Radar chart
    Radar,
    /// Scatter (XY) chart
    Scatter,
}

impl ChartKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Area,
        Self::Bar,
        Self::Bar3D,
        Self::Bubble,
        Self::Doughnut,
        Self::Line,
        Self::Pie,
        Self::Pie3D,
        Self::Radar,
        Self::Scatter,
    ];

    /// Stable kind name, used as the collection key and hash discriminator.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Bar => "Bar",
            Self::Bar3D => "Bar3D",
            Self::Bubble => "Bubble",
            Self::Doughnut => "Doughnut",
            Self::Line => "Line",
            Self::Pie => "Pie",
            Self::Pie3D => "Pie3D",
            Self::Radar => "Radar",
            Self::Scatter => "Scatter",
        }
    }

    /// Returns the XML element name for this chart kind.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Area => "areaChart",
            Self::Bar => "barChart",
            Self::Bar3D => "bar3DChart",
            Self::Bubble => "bubbleChart",
            Self::Doughnut => "doughnutChart",
            Self::Line => "lineChart",
            Self::Pie => "pieChart",
            Self::Pie3D => "pie3DChart",
            Self::Radar => "radarChart",
            Self::Scatter => "scatterChart",
        }
    }

    /// Returns true if this kind plots without X/Y axes.
    #[inline]
    pub const fn is_pie_like(&self) -> bool {
        matches!(self, Self::Pie | Self::Pie3D | Self::Doughnut)
    }

    /// Returns true if this kind plots numeric X values instead of categories.
    #[inline]
    pub const fn is_scatter_like(&self) -> bool {
        matches!(self, Self::Scatter | Self::Bubble)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::invalid_parameter("chartKind", s))
    }
}

/// Axis dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Horizontal axis
    #[default]
    X,
    /// Vertical axis
    Y,
}

impl AxisType {
    /// Returns the string value for this axis type.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }

    /// The perpendicular axis type.
    #[inline]
    pub const fn perpendicular(&self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_value())
    }
}

impl FromStr for AxisType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(Error::invalid_parameter("axisType", s)),
        }
    }
}

/// Whether an axis spaces categories or scales values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisValueType {
    /// Category axis
    #[default]
    Category,
    /// Value axis
    Value,
}

impl AxisValueType {
    /// Returns the string value for this value type.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Value => "value",
        }
    }

    /// Returns the XML element name for an axis of this value type.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::Category => "catAx",
            Self::Value => "valAx",
        }
    }
}

impl fmt::Display for AxisValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_value())
    }
}

impl FromStr for AxisValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "category" => Ok(Self::Category),
            "value" => Ok(Self::Value),
            _ => Err(Error::invalid_parameter("axisValueType", s)),
        }
    }
}

/// Where an axis crosses its perpendicular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisCrosses {
    /// Auto zero crossing
    #[default]
    #[serde(rename = "autoZero")]
    AutoZero,
    /// Minimum value
    #[serde(rename = "min")]
    Min,
    /// Maximum value
    #[serde(rename = "max")]
    Max,
}

impl AxisCrosses {
    /// Returns the XML value for this crossing mode.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::AutoZero => "autoZero",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}


/// Tick mark style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMark {
    /// No tick mark
    #[default]
    None,
    /// Cross tick mark
    Cross,
    /// Inside tick mark
    In,
    /// Outside tick mark
    Out,
}

impl TickMark {
    /// Returns the XML value for this tick mark style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cross => "cross",
            Self::In => "in",
            Self::Out => "out",
        }
    }
}


/// Tick label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TickLabelPosition {
    /// Next to axis
    #[default]
    #[serde(rename = "nextTo")]
    NextTo,
    /// High position
    #[serde(rename = "high")]
    High,
    /// Low position
    #[serde(rename = "low")]
    Low,
}

impl TickLabelPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::NextTo => "nextTo",
            Self::High => "high",
            Self::Low => "low",
        }
    }
}


/// Bar/column direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarDirection {
    /// Horizontal bars
    Bar,
    /// Vertical bars (columns)
    #[default]
    #[serde(rename = "col")]
    Column,
}

impl BarDirection {
    /// Returns the XML value for this direction.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "col",
        }
    }
}

/// Bar grouping type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarGrouping {
    /// Clustered bars
    #[default]
    Clustered,
    /// Stacked bars
    Stacked,
    /// 100% stacked bars
    PercentStacked,
    /// Standard grouping
    Standard,
}

impl BarGrouping {
    /// Returns the XML value for this grouping.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Clustered => "clustered",
            Self::Stacked => "stacked",
            Self::PercentStacked => "percentStacked",
            Self::Standard => "standard",
        }
    }
}

/// 3D bar shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarShape {
    /// Box shape
    #[default]
    Box,
    /// Cone shape
    Cone,
    /// Cone to maximum
    ConeToMax,
    /// Cylinder shape
    Cylinder,
    /// Pyramid shape
    Pyramid,
    /// Pyramid to maximum
    PyramidToMax,
}

impl BarShape {
    /// Returns the XML value for this shape.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Cone => "cone",
            Self::ConeToMax => "coneToMax",
            Self::Cylinder => "cylinder",
            Self::Pyramid => "pyramid",
            Self::PyramidToMax => "pyramidToMax",
        }
    }
}

/// Radar chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarStyle {
    /// Standard radar
    Standard,
    /// Filled radar
    Filled,
    /// Marker radar
    #[default]
    Marker,
}

impl RadarStyle {
    /// Returns the XML value for this radar style.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Filled => "filled",
            Self::Marker => "marker",
        }
    }
}

/// Data label position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataLabelPosition {
    /// Best fit position
    BestFit,
    /// Center position
    #[serde(rename = "ctr")]
    Center,
    /// Inside base position
    #[serde(rename = "inBase")]
    InsideBase,
    /// Inside end position
    #[serde(rename = "inEnd")]
    InsideEnd,
    /// Outside end position
    #[serde(rename = "outEnd")]
    OutsideEnd,
    /// Left position
    #[serde(rename = "l")]
    Left,
    /// Right position
    #[serde(rename = "r")]
    Right,
    /// Top position
    #[serde(rename = "t")]
    Top,
    /// Bottom position
    #[serde(rename = "b")]
    Bottom,
}

impl DataLabelPosition {
    /// Returns the XML value for this position.
    #[inline]
    pub const fn xml_value(&self) -> &'static str {
        match self {
            Self::BestFit => "bestFit",
            Self::Center => "ctr",
            Self::InsideBase => "inBase",
            Self::InsideEnd => "inEnd",
            Self::OutsideEnd => "outEnd",
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::Bottom => "b",
        }
    }
}

/// Implements `Display` and `FromStr` in terms of `xml_value()`.
macro_rules! impl_xml_spelling {
    ($ty:ident, $param:literal, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.xml_value())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                [$(Self::$variant),+]
                    .into_iter()
                    .find(|value| value.xml_value() == s)
                    .ok_or_else(|| Error::invalid_parameter($param, s))
            }
        }
    };
}

impl_xml_spelling!(AxisCrosses, "crossesAt", [AutoZero, Min, Max]);
impl_xml_spelling!(TickMark, "tickMark", [None, Cross, In, Out]);
impl_xml_spelling!(TickLabelPosition, "tickLabelPosition", [NextTo, High, Low]);
impl_xml_spelling!(BarDirection, "barDirection", [Bar, Column]);
impl_xml_spelling!(BarGrouping, "grouping", [Clustered, Stacked, PercentStacked, Standard]);
impl_xml_spelling!(BarShape, "shape", [Box, Cone, ConeToMax, Cylinder, Pyramid, PyramidToMax]);
impl_xml_spelling!(RadarStyle, "radarStyle", [Standard, Filled, Marker]);
impl_xml_spelling!(
    DataLabelPosition,
    "dataLabelPosition",
    [BestFit, Center, InsideBase, InsideEnd, OutsideEnd, Left, Right, Top, Bottom]
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_type_parse() {
        assert_eq!("x".parse::<AxisType>(), Ok(AxisType::X));
        assert_eq!("y".parse::<AxisType>(), Ok(AxisType::Y));
        assert_eq!(
            "X".parse::<AxisType>(),
            Err(Error::invalid_parameter("axisType", "X"))
        );
    }

    #[test]
    fn test_axis_value_type_parse() {
        assert_eq!("value".parse::<AxisValueType>(), Ok(AxisValueType::Value));
        assert!(matches!(
            "date".parse::<AxisValueType>(),
            Err(Error::InvalidParameter { name: "axisValueType", .. })
        ));
    }

    #[test]
    fn test_chart_kind_names_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.name().parse::<ChartKind>(), Ok(kind));
        }
        assert!("Stock".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_chart_kind_families() {
        assert!(ChartKind::Doughnut.is_pie_like());
        assert!(!ChartKind::Bar.is_pie_like());
        assert!(ChartKind::Bubble.is_scatter_like());
        assert!(!ChartKind::Line.is_scatter_like());
    }

    #[test]
    fn test_enum_spelling_round_trips() {
        assert_eq!(TickMark::Out.to_string(), "out");
        assert_eq!("cross".parse::<TickMark>(), Ok(TickMark::Cross));
        assert_eq!(AxisCrosses::AutoZero.to_string(), "autoZero");
        assert_eq!(TickLabelPosition::NextTo.to_string(), "nextTo");
        assert_eq!("col".parse::<BarDirection>(), Ok(BarDirection::Column));
        assert_eq!(BarGrouping::PercentStacked.to_string(), "percentStacked");
        assert_eq!("pyramidToMax".parse::<BarShape>(), Ok(BarShape::PyramidToMax));
        assert_eq!(RadarStyle::Filled.to_string(), "filled");
        assert_eq!("outEnd".parse::<DataLabelPosition>(), Ok(DataLabelPosition::OutsideEnd));
        assert_eq!(
            "column".parse::<BarDirection>(),
            Err(Error::invalid_parameter("barDirection", "column"))
        );
        assert!("middle".parse::<TickLabelPosition>().is_err());
    }

    #[test]
    fn test_perpendicular() {
        assert_eq!(AxisType::X.perpendicular(), AxisType::Y);
        assert_eq!(AxisType::Y.perpendicular(), AxisType::X);
    }
}
