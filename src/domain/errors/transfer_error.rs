//! Selection transfer errors.

use thiserror::Error;

/// Failure to decode a selection payload from its wire form.
///
/// Missing fields and fields of an unsupported shape are not errors; they
/// decode to defaults.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The input is not a JSON object.
    #[error("malformed selection payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
