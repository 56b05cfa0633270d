//! Error handling for the DCAM property binding

use crate::common::ErrorCode;

/// Result type for DCAM operations
pub type DcamResult<T> = Result<T, DcamError>;

/// Errors that can occur when setting DCAM properties
#[derive(Debug, thiserror::Error)]
pub enum DcamError {
    /// The SDK reported a failure code
    #[error("{function}() failed: error {code}")]
    Sdk {
        function: &'static str,
        code: ErrorCode,
    },

    /// A host argument could not be marshalled into a native value
    #[error("invalid argument {position}: {reason}")]
    InvalidArgument { position: usize, reason: String },

    /// A property reference did not resolve to an identifier
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// A preset document could not be parsed
    #[error("invalid preset: {0}")]
    Preset(#[from] serde_json::Error),

    /// A preset file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DcamError {
    /// SDK error code carried by this error, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DcamError::Sdk { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(position: usize, reason: impl Into<String>) -> Self {
        DcamError::InvalidArgument {
            position,
            reason: reason.into(),
        }
    }
}
