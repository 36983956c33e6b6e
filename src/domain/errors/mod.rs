//! Domain error types.

mod preferences_error;
mod transfer_error;

pub use preferences_error::PreferencesError;
pub use transfer_error::TransferError;
