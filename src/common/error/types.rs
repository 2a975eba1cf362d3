//! Unified error types for the chart model.
//!
//! Validation failures are reported eagerly by the mutating call that
//! received the bad value, so every variant carries enough context to be
//! shown to the caller as-is.
use thiserror::Error;

/// Main error type for slidechart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A setter received a value outside its enumerated set
    #[error("Invalid parameter passed: {name} = {value:?}")]
    InvalidParameter {
        /// Name of the rejected parameter
        name: &'static str,
        /// The offending value
        value: String,
    },

    /// The plot area holds no chart type
    #[error("Undefined chart type")]
    UndefinedChartType,

    /// A plot-area template could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::InvalidParameter`] for `name` and `value`.
    #[inline]
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

/// Result type for slidechart operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid_parameter("axisType", "z");
        assert_eq!(err.to_string(), "Invalid parameter passed: axisType = \"z\"");
    }

    #[test]
    fn test_undefined_chart_type_message() {
        assert_eq!(Error::UndefinedChartType.to_string(), "Undefined chart type");
    }
}
