//! Data transfer objects.

pub mod selection;

pub use selection::{PayloadValue, ResolvedDetail, SelectionPayload};
