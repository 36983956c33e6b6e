//! Application layer with presenters, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Presenters and UI-facing services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ResolvedDetail, SelectionPayload};
pub use services::{DetailPresenter, ListPresenter, NotificationManager};
pub use use_cases::{StartupOutcome, StartupSequencer};
