//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to serialize settings: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Domain Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid fruit entry '{name}': {reason}")]
    InvalidFruitEntry { name: String, reason: String },

    #[error("Unknown chart type: {0} (expected bar, line or pie)")]
    InvalidChartType(String),

    #[error("Invalid row '{0}': expected TITLE=VALUE")]
    InvalidRow(String),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn invalid_fruit_entry(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFruitEntry {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error should abort the program
    ///
    /// A bad lookup table is a static configuration defect, so it is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::InvalidFruitEntry { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::InvalidChartType("donut".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown chart type: donut (expected bar, line or pie)"
        );

        let err = Error::invalid_fruit_entry("", "name is empty");
        assert!(err.to_string().contains("name is empty"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml_serialize() {
        // A bare integer is not a TOML document
        let err = toml::to_string(&42u32)
            .context("serializing settings")
            .unwrap_err();
        assert!(matches!(err, Error::TomlSerialize(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::invalid_fruit_entry("fig", "duplicate name").is_fatal());
        assert!(!Error::InvalidChartType("donut".into()).is_fatal());
        assert!(!Error::InvalidRow("Apples".into()).is_fatal());
        assert!(!Error::Io(std::io::Error::other("disk full")).is_fatal());
    }

    #[test]
    fn test_invalid_chart_type_message() {
        let err = Error::InvalidChartType("donut".to_string());
        assert!(err.to_string().contains("donut"));
        assert!(err.to_string().contains("bar, line or pie"));
    }

    #[test]
    fn test_invalid_row_message() {
        let err = Error::InvalidRow("Apples".to_string());
        assert_eq!(err.to_string(), "Invalid row 'Apples': expected TITLE=VALUE");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_result_ext_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("writing config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
