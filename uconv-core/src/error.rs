//! Structured errors
//!
//! The lenient conversion path never produces these. They come from catalog
//! loading, from the strict conversion API, and from input parsing at the
//! server boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const CATEGORY_MISMATCH: &str = "CATEGORY_MISMATCH";
    pub const INVALID_SCALE: &str = "INVALID_SCALE";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const CATALOG_PARSE: &str = "CATALOG_PARSE";
    pub const CATALOG_READ: &str = "CATALOG_READ";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
}

/// Error type for catalog and conversion operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unit '{unit}' belongs to '{found}', not '{expected}'")]
    CategoryMismatch {
        unit: String,
        expected: String,
        found: String,
    },

    #[error("Unit '{unit}' in category '{category}' has invalid scale {scale}: must be positive and finite")]
    InvalidScale {
        category: String,
        unit: String,
        scale: f64,
    },

    #[error("Unit '{unit}' appears more than once in category '{category}'")]
    DuplicateUnit { category: String, unit: String },

    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    #[error("Cannot read catalog '{path}': {reason}")]
    CatalogRead { path: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ConvertError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConvertError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            ConvertError::CategoryMismatch { .. } => codes::CATEGORY_MISMATCH,
            ConvertError::InvalidScale { .. } => codes::INVALID_SCALE,
            ConvertError::DuplicateUnit { .. } => codes::DUPLICATE_UNIT,
            ConvertError::CatalogParse(_) => codes::CATALOG_PARSE,
            ConvertError::CatalogRead { .. } => codes::CATALOG_READ,
            ConvertError::InvalidInput(_) => codes::INVALID_INPUT,
        }
    }

    /// Suggestion for fixing the error, where one is obvious
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::UnknownUnit { category, .. } => {
                Some(format!("Use list_units(\"{}\") to see valid unit ids", category))
            }
            ConvertError::UnknownCategory(_) => {
                Some("Use list_categories() to see valid category ids".to_string())
            }
            ConvertError::CategoryMismatch { expected, .. } => {
                Some(format!("Pass units from the '{}' category", expected))
            }
            ConvertError::InvalidScale { .. } => {
                Some("Fix the toBase factor in the catalog file".to_string())
            }
            ConvertError::DuplicateUnit { .. } => {
                Some("Unit ids must be unique within a category".to_string())
            }
            ConvertError::CatalogParse(_) => {
                Some("Expected { categoryId: [ {id, name, symbol, toBase}, ... ] }".to_string())
            }
            ConvertError::CatalogRead { .. } => {
                Some("Check UCONV_CATALOG_PATH points to a readable file".to_string())
            }
            ConvertError::InvalidInput(_) => Some("Provide a finite decimal number".to_string()),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::CatalogParse(err.to_string())
    }
}

/// Serializable error for clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        let report = ErrorReport::new(err.code(), err.to_string());
        match err.suggestion() {
            Some(s) => report.with_suggestion(s),
            None => report,
        }
    }
}

impl From<ConvertError> for ErrorReport {
    fn from(err: ConvertError) -> Self {
        ErrorReport::from(&err)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
