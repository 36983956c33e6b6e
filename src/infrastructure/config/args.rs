//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pikdex",
    version,
    about = "A terminal field guide to Pikmin and the creatures of the Distant Planet",
    long_about = None
)]
/// Command line arguments; each one overrides its `config.toml` value.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Skip the startup splash delay.
    #[arg(long)]
    pub native_splash: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Start in this language (es, en) instead of the saved one.
    #[arg(long, value_name = "CODE", env = "PIKDEX_LOCALE")]
    pub locale: Option<String>,

    /// Do not read or write the preference file.
    #[arg(long)]
    pub no_persist: bool,
}
