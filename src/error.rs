//! Error types for the financial model

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the model and the report pipeline
#[derive(Debug, Error)]
pub enum ModelError {
    /// A numeric input failed validation (non-finite, out of range)
    #[error("validation failed: {0}")]
    Validation(String),

    /// A filesystem operation failed
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart rendering failed
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// PDF document assembly failed
    #[error("document assembly failed: {0}")]
    Document(String),
}

impl ModelError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Validate that a value is finite, naming the parameter in the error
pub(crate) fn require_finite(name: &str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::Validation(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Validate that a value is a finite fraction within [0, 1]
pub(crate) fn require_fraction(name: &str, value: f64) -> Result<(), ModelError> {
    require_finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::Validation(format!(
            "{} must lie in [0, 1], got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_finite_rejects_nan() {
        assert!(require_finite("x", f64::NAN).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
        assert!(require_finite("x", -3.5).is_ok());
    }

    #[test]
    fn test_require_fraction_bounds() {
        assert!(require_fraction("rate", 0.0).is_ok());
        assert!(require_fraction("rate", 1.0).is_ok());
        assert!(require_fraction("rate", 1.01).is_err());
        assert!(require_fraction("rate", -0.01).is_err());
    }

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = require_fraction("free_to_smart", 2.0).unwrap_err();
        assert!(err.to_string().contains("free_to_smart"));
    }
}
