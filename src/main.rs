use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pikdex::domain::{Locale, PreferencesPort};
use pikdex::infrastructure::{
    AppConfig, CliArgs, FilePreferences, InMemoryPreferences, SpriteSheet, StorageManager,
    StringCatalog,
};
use pikdex::presentation::{App, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = pikdex::VERSION, "Starting Pikdex");

    let preferences: Arc<dyn PreferencesPort> = if config.no_persist {
        info!("Preferences kept in memory only");
        Arc::new(InMemoryPreferences::new())
    } else {
        Arc::new(FilePreferences::with_storage(storage))
    };

    // The stored locale only seeds the live one; --locale wins over it.
    let locale = match config.locale.as_deref() {
        Some(code) => Locale::from_code(code),
        None => Locale::from_code(&preferences.get_locale()),
    };

    let options = AppOptions::from_config(&config, locale);
    Ok(App::new(
        Arc::new(StringCatalog::bundled()),
        Arc::new(SpriteSheet::new()),
        preferences,
        options,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
