//! Use case implementations.

pub mod startup_sequencer;

pub use startup_sequencer::{SPLASH_DELAY, StartupOutcome, StartupPhase, StartupSequencer};
