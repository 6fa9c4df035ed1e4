// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error types for Python version parsing and comparison

use thiserror::Error;

/// Result type alias for version operations
pub type Result<T> = std::result::Result<T, VersionError>;

/// Errors raised by the version parser and the comparison entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// A required argument was absent
    #[error("Invalid argument: `{0}` must not be absent")]
    InvalidArgument(&'static str),

    /// The input did not match the version grammar, or its release
    /// segment is not a dotted integer sequence
    #[error("Invalid version '{input}': {reason}")]
    Format {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A comparison was handed something that is not a `PythonVersion`
    #[error("Type mismatch: expected PythonVersion, got {0}")]
    TypeMismatch(&'static str),
}

impl VersionError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        VersionError::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, VersionError::InvalidArgument(_))
    }

    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, VersionError::Format { .. })
    }

    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, VersionError::TypeMismatch(_))
    }
}
