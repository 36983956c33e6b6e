//! Pikdex - a terminal field guide to Pikmin and the creatures of the
//! Distant Planet.
//!
//! This crate provides a static creature catalog, persisted preferences, a
//! grid and detail view with a localized interface, and a TUI host built with
//! clean architecture.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing presenters, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, the catalog, errors and ports.
pub mod domain;
/// Infrastructure layer containing adapters for files and bundled resources.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "pikdex";
