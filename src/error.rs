//! Error types for beammech

use thiserror::Error;

/// Main error type for solving a beam problem
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid stiffness: {0}")]
    InvalidStiffness(String),

    #[error("Invalid supports: {0}")]
    InvalidSupports(String),

    #[error("Invalid load: {0}")]
    InvalidLoad(String),

    #[error("Singular support system - supports must be two distinct stations")]
    SingularSupports,

    #[error("Problem not solved - run solve() first")]
    NotSolved,

    #[error("Load argument error: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Errors raised while building a load from keyword arguments.
///
/// The two kinds are kept apart on purpose: `Argument` means the caller named
/// the wrong keys, `Value` means a key was right but its value is not a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("argument '{key}': {reason}")]
    Argument { key: String, reason: String },

    #[error("argument '{key}' cannot be converted to a number: {value}")]
    Value { key: String, value: String },
}

impl LoadError {
    pub(crate) fn missing(key: &str) -> Self {
        LoadError::Argument {
            key: key.to_string(),
            reason: "required argument is missing".to_string(),
        }
    }

    pub(crate) fn unrecognized(key: &str) -> Self {
        LoadError::Argument {
            key: key.to_string(),
            reason: "unrecognized argument".to_string(),
        }
    }

    pub(crate) fn value(key: &str, value: impl ToString) -> Self {
        LoadError::Value {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// True for the missing/misspelled-argument kind
    pub fn is_argument_error(&self) -> bool {
        matches!(self, LoadError::Argument { .. })
    }

    /// True for the value-conversion kind
    pub fn is_value_error(&self) -> bool {
        matches!(self, LoadError::Value { .. })
    }
}

/// Result type for load construction
pub type LoadResult<T> = Result<T, LoadError>;
