//! Error types for the trajectory chart backend.
//!
//! Every fallible library operation returns [`TrajectoryResult`]. The binary
//! wraps these in `anyhow` for reporting.

/// Result type for trajectory chart operations
pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

/// Error type for trajectory chart operations
#[derive(Debug, thiserror::Error)]
pub enum TrajectoryError {
    /// A date cell could not be parsed with the configured format.
    /// `row` is the 1-based data row (header excluded).
    #[error("Date parse error at row {row}: '{value}' does not match format '{format}'")]
    DateParse {
        row: usize,
        value: String,
        format: String,
    },

    /// Doubling time must be a finite, strictly positive number of days.
    #[error("Invalid doubling time: {days} days (must be finite and > 0)")]
    InvalidDoublingTime { days: f64 },

    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Tabular input was structurally unusable (missing column, bad number).
    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrajectoryError {
    /// Shorthand for a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Shorthand for a CSV error.
    pub fn csv(message: impl Into<String>) -> Self {
        Self::Csv {
            message: message.into(),
        }
    }

    /// Check if this error came from malformed input data rather than setup.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::DateParse { .. } | Self::Csv { .. })
    }
}

impl From<csv::Error> for TrajectoryError {
    fn from(err: csv::Error) -> Self {
        Self::csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_parse_message_names_row() {
        let err = TrajectoryError::DateParse {
            row: 4,
            value: "31/02/2020".to_string(),
            format: "%d/%m/%Y".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("row 4"));
        assert!(msg.contains("31/02/2020"));
        assert!(err.is_data_error());
    }

    #[test]
    fn test_configuration_is_not_data_error() {
        let err = TrajectoryError::configuration("bad");
        assert_eq!(err.to_string(), "Configuration error: bad");
        assert!(!err.is_data_error());
    }
}
