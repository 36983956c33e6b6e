//! Preference persistence errors.

use thiserror::Error;

/// Failures of the preference storage backend.
///
/// These never reach the screens; the preference adapter logs and swallows
/// them.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PreferencesError {
    #[error("failed to determine preferences directory")]
    DirectoryNotFound,

    #[error("failed to read preferences: {message}")]
    ReadFailed { message: String },

    #[error("failed to write preferences: {message}")]
    WriteFailed { message: String },
}

impl PreferencesError {
    /// Creates read failed error.
    #[must_use]
    pub fn read_failed(message: impl Into<String>) -> Self {
        Self::ReadFailed {
            message: message.into(),
        }
    }

    /// Creates write failed error.
    #[must_use]
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }
}
