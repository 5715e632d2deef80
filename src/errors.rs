//! Error types for carbonscore operations.
//!
//! Every failure of the engine is reported through [`CarbonError`]. A calculation
//! either returns a complete result or exactly one of these errors; there are no
//! partial results.
//!
//! # Error Codes
//!
//! Error codes are assigned by category:
//! - E001-E009: I/O and parse errors (CLI and dataset loading)
//! - E010-E019: Reference data gaps (unknown factor, category, sector)
//! - E020-E029: Configuration and reference dataset errors
//! - E030-E039: Input errors
//!
//! Reference data gaps and configuration errors indicate a defect on the
//! operator side rather than in the caller's input. The request layer should
//! surface them as server-side failures, see [`CarbonError::is_reference_defect`].
//!
//! # Example
//!
//! ```rust
//! use carbonscore::errors::{CarbonError, ErrorCode};
//!
//! let err = CarbonError::unknown_sector("aerospace");
//! assert_eq!(err.code(), ErrorCode::UNKNOWN_SECTOR);
//! assert!(err.is_reference_defect());
//! assert!(!err.is_user_fixable());
//! ```

use serde::ser::SerializeStruct;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error
    pub const IO: ErrorCode = ErrorCode("E001");
    /// Malformed JSON or TOML document
    pub const PARSE: ErrorCode = ErrorCode("E002");

    /// No emission factor for a (category, unit) pair
    pub const UNKNOWN_FACTOR: ErrorCode = ErrorCode("E010");
    /// Category outside the registered set
    pub const UNKNOWN_CATEGORY: ErrorCode = ErrorCode("E011");
    /// Sector without benchmark reference values
    pub const UNKNOWN_SECTOR: ErrorCode = ErrorCode("E012");

    /// Reference dataset is inconsistent
    pub const REFERENCE_INVALID: ErrorCode = ErrorCode("E020");
    /// Configuration value out of range
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E021");

    /// Activity input violates an invariant
    pub const INPUT_INVALID: ErrorCode = ErrorCode("E030");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for carbonscore operations
#[derive(Debug, Error)]
pub enum CarbonError {
    /// No factor registered for the category and unit
    #[error("No emission factor for category '{category}' in unit '{unit}'")]
    UnknownFactor { category: String, unit: String },

    /// Category not registered in the scope map
    #[error("Unknown activity category '{category}'")]
    UnknownCategory { category: String },

    /// Sector has no benchmark and fallback is disabled
    #[error("No benchmark reference values for sector '{sector}'")]
    UnknownSector { sector: String },

    /// Activity input rejected by the engine
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Reference dataset failed consistency checks
    #[error("Invalid reference data: {message}")]
    InvalidReferenceData { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File system errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed JSON or TOML
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        path: Option<PathBuf>,
    },
}

impl CarbonError {
    pub fn unknown_factor(category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self::UnknownFactor {
            category: category.into(),
            unit: unit.into(),
        }
    }

    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    pub fn unknown_sector(sector: impl Into<String>) -> Self {
        Self::UnknownSector {
            sector: sector.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_reference(message: impl Into<String>) -> Self {
        Self::InvalidReferenceData {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an I/O error from a std::io::Error with path context
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    pub fn parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Parse {
            message: message.into(),
            path,
        }
    }

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownFactor { .. } => ErrorCode::UNKNOWN_FACTOR,
            Self::UnknownCategory { .. } => ErrorCode::UNKNOWN_CATEGORY,
            Self::UnknownSector { .. } => ErrorCode::UNKNOWN_SECTOR,
            Self::InvalidInput { .. } => ErrorCode::INPUT_INVALID,
            Self::InvalidReferenceData { .. } => ErrorCode::REFERENCE_INVALID,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::Io { .. } => ErrorCode::IO,
            Self::Parse { .. } => ErrorCode::PARSE,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownFactor { .. }
            | Self::UnknownCategory { .. }
            | Self::UnknownSector { .. }
            | Self::InvalidReferenceData { .. } => "Reference",
            Self::InvalidInput { .. } => "Input",
            Self::Config { .. } => "Config",
            Self::Io { .. } => "I/O",
            Self::Parse { .. } => "Parse",
        }
    }

    /// True for reference-data and configuration gaps.
    ///
    /// These are never caused by the caller's activity data and retrying the
    /// same request cannot succeed until the reference tables are fixed.
    #[must_use]
    pub fn is_reference_defect(&self) -> bool {
        matches!(
            self,
            Self::UnknownFactor { .. }
                | Self::UnknownCategory { .. }
                | Self::UnknownSector { .. }
                | Self::InvalidReferenceData { .. }
                | Self::Config { .. }
        )
    }

    /// Check if this error is something the caller can fix by changing the input.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Parse { .. })
    }

    /// Process exit code used by the CLI.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } | Self::Parse { .. } => 2,
            _ if self.is_reference_defect() => 3,
            _ => 1,
        }
    }
}

impl Serialize for CarbonError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CarbonError", 4)?;
        state.serialize_field("code", self.code().as_str())?;
        state.serialize_field("category", self.category())?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("reference_defect", &self.is_reference_defect())?;
        state.end()
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, CarbonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_gaps_are_defects() {
        for err in [
            CarbonError::unknown_factor("electricity", "kWh"),
            CarbonError::unknown_category("water"),
            CarbonError::unknown_sector("mining"),
            CarbonError::invalid_reference("empty table"),
        ] {
            assert!(err.is_reference_defect(), "{err}");
            assert!(!err.is_user_fixable());
            assert_eq!(err.category(), "Reference");
            assert_eq!(err.exit_code(), 3);
        }
    }

    #[test]
    fn test_invalid_input_is_user_fixable() {
        let err = CarbonError::invalid_input("energy.gas_kwh", "must be non-negative");
        assert_eq!(err.code(), ErrorCode::INPUT_INVALID);
        assert!(err.is_user_fixable());
        assert!(!err.is_reference_defect());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "Invalid input for 'energy.gas_kwh': must be non-negative"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CarbonError::io(source, "/tmp/input.json");
        assert_eq!(err.code(), ErrorCode::IO);
        assert!(err.to_string().contains("/tmp/input.json"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_error_serialization() {
        let err = CarbonError::unknown_sector("mining");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"E012\""));
        assert!(json.contains("\"category\":\"Reference\""));
        assert!(json.contains("\"reference_defect\":true"));
    }
}
