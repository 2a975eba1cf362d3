//! Chart series model.
//!
//! A series is an ordered list of (category, value) points plus the fill and
//! data-label settings used to draw them.

use serde::{Deserialize, Serialize};

use crate::charts::types::DataLabelPosition;
use crate::common::hash::{ComparableObject, Fingerprint};
use crate::common::style::Fill;

/// Default series title.
pub const DEFAULT_SERIES_TITLE: &str = "Series Title";

/// Data label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataLabels {
    /// Position of data labels
    pub position: Option<DataLabelPosition>,
    /// Show legend key
    pub show_legend_key: bool,
    /// Show value
    pub show_value: bool,
    /// Show category name
    pub show_category_name: bool,
    /// Show series name
    pub show_series_name: bool,
    /// Show percentage (for pie charts)
    pub show_percentage: bool,
}

impl DataLabels {
    /// Create a new data labels configuration.
    #[inline]
    pub fn new() -> Self {
        Self {
            position: None,
            show_legend_key: false,
            show_value: true,
            show_category_name: false,
            show_series_name: false,
            show_percentage: false,
        }
    }

    /// Show values on labels.
    #[inline]
    pub fn with_show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    /// Set label position.
    #[inline]
    pub fn with_position(mut self, position: DataLabelPosition) -> Self {
        self.position = Some(position);
        self
    }

    fn fingerprint(&self, fingerprint: Fingerprint) -> Fingerprint {
        fingerprint
            .opt_part(self.position.map(|p| p.xml_value()))
            .flag(self.show_legend_key)
            .flag(self.show_value)
            .flag(self.show_category_name)
            .flag(self.show_series_name)
            .flag(self.show_percentage)
    }
}

impl Default for DataLabels {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A data series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    title: String,
    values: Vec<(String, f64)>,
    fill: Fill,
    labels: DataLabels,
    #[serde(skip)]
    hash_index: Option<usize>,
}

impl Series {
    /// Create an empty series.
    #[inline]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            values: Vec::new(),
            fill: Fill::new(),
            labels: DataLabels::new(),
            hash_index: None,
        }
    }

    /// Create a series from (category, value) points.
    pub fn with_values<C, I>(title: impl Into<String>, values: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = (C, f64)>,
    {
        let mut series = Self::new(title);
        series.values = values
            .into_iter()
            .map(|(category, value)| (category.into(), value))
            .collect();
        series
    }

    /// Series title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the series title.
    #[inline]
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Points in plotting order.
    #[inline]
    pub fn values(&self) -> &[(String, f64)] {
        &self.values
    }

    /// Append a point.
    #[inline]
    pub fn add_value(&mut self, category: impl Into<String>, value: f64) -> &mut Self {
        self.values.push((category.into(), value));
        self
    }

    /// Series fill.
    #[inline]
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Mutable series fill.
    #[inline]
    pub fn fill_mut(&mut self) -> &mut Fill {
        &mut self.fill
    }

    /// Replace the series fill.
    #[inline]
    pub fn set_fill(&mut self, fill: Fill) -> &mut Self {
        self.fill = fill;
        self
    }

    /// Data label settings.
    #[inline]
    pub fn labels(&self) -> &DataLabels {
        &self.labels
    }

    /// Mutable data label settings.
    #[inline]
    pub fn labels_mut(&mut self) -> &mut DataLabels {
        &mut self.labels
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.values == other.values
            && self.fill == other.fill
            && self.labels == other.labels
    }
}

impl Default for Series {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_SERIES_TITLE)
    }
}

impl ComparableObject for Series {
    fn hash_code(&self) -> String {
        let mut fingerprint = Fingerprint::new()
            .part(&self.fill.hash_code())
            .part(&self.title)
            .int(self.values.len());
        for (category, value) in &self.values {
            fingerprint = fingerprint.part(category).float(*value);
        }
        self.labels.fingerprint(fingerprint).part("Series").finish()
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
    use crate::common::style::Color;

    #[test]
    fn test_with_values_keeps_order() {
        let series = Series::with_values("Sales", [("Jan", 1.0), ("Feb", 2.0), ("Mar", 3.0)]);
        let categories: Vec<&str> = series.values().iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(categories, ["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn test_equality_ignores_hash_index() {
        let mut stamped = Series::with_values("Sales", [("Jan", 1.0)]);
        stamped.set_hash_index(Some(4));
        assert_eq!(stamped, Series::with_values("Sales", [("Jan", 1.0)]));
        assert_ne!(stamped, Series::with_values("Sales", [("Jan", 2.0)]));
    }

    #[test]
    fn test_hash_tracks_values_fill_and_labels() {
        let mut series = Series::with_values("Sales", [("Jan", 1.0)]);
        let mut seen = vec![series.hash_code()];

        series.add_value("Feb", 2.0);
        seen.push(series.hash_code());

        series.set_fill(Fill::solid(Color::rgb(0, 128, 0)));
        seen.push(series.hash_code());

        series.labels_mut().show_percentage = true;
        seen.push(series.hash_code());

        let mut unique = seen.clone();
        unique.dedup();
        assert_eq!(unique.len(), seen.len());
    }

    #[test]
    fn test_default_title() {
        assert_eq!(Series::default().title(), DEFAULT_SERIES_TITLE);
    }
}
