//! my-prayers - run a guided prayer session in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use my_prayers::adapters::console::{parse_line, ConsoleCommand, ConsoleRenderer, HELP};
use my_prayers::adapters::{
    BuiltinPanelCatalog, FileAppStateStore, FileEntryStore, InMemoryAppStateStore,
    InMemoryEntryStore, YamlPanelCatalog,
};
use my_prayers::application::{PrayerSessionController, SessionPorts};
use my_prayers::config::{AppConfig, LogFormat, LoggingConfig, StorageBackend};
use my_prayers::domain::foundation::PanelSetId;
use my_prayers::domain::selection::RecencySelector;
use my_prayers::ports::{AppStateStore, EntryStore, PanelCatalog, PresentationAdapter};

/// Guided prayer sessions over a personal prayer journal
#[derive(Parser, Debug, Clone)]
#[command(name = "my-prayers")]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML configuration file (environment variables still apply on top)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory holding the journal (overrides storage.data_dir)
    #[arg(short = 'd', long)]
    data_dir: Option<PathBuf>,

    /// Panel set for this session
    #[arg(short = 'p', long)]
    panel_set: Option<String>,

    /// Seed for reproducible entry selection
    #[arg(long)]
    seed: Option<u64>,

    /// Keep the journal in memory; nothing is saved
    #[arg(long)]
    memory: bool,

    /// Show debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!("warn,my_prayers={}", level))
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = match logging.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        AppConfig::load_from(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = &args.data_dir {
        config.storage.data_dir = dir.clone();
    }
    if args.memory {
        config.storage.backend = StorageBackend::Memory;
    }
    config.validate().context("invalid configuration")?;

    init_logging(&config.logging, args.verbose)?;

    let (entries, app_state): (Arc<dyn EntryStore>, Arc<dyn AppStateStore>) =
        match config.storage.backend {
            StorageBackend::File => {
                tracing::info!(data_dir = %config.storage.data_dir.display(), "using file storage");
                (
                    Arc::new(FileEntryStore::new(&config.storage.data_dir)),
                    Arc::new(FileAppStateStore::new(&config.storage.data_dir)),
                )
            }
            StorageBackend::Memory => {
                tracing::info!("using in-memory storage");
                (
                    Arc::new(InMemoryEntryStore::new()),
                    Arc::new(InMemoryAppStateStore::new()),
                )
            }
        };

    let catalog: Arc<dyn PanelCatalog> = match &config.storage.panel_catalog {
        Some(path) => Arc::new(YamlPanelCatalog::load(path).await?),
        None => Arc::new(BuiltinPanelCatalog::new()),
    };

    let presenter = Arc::new(ConsoleRenderer::stdout());
    let selector = RecencySelector::new(config.selection.policy())?;
    let settings = config.session_settings(args.seed)?;
    let ports = SessionPorts {
        entries: entries.clone(),
        catalog,
        app_state,
        presenter: presenter.clone(),
    };
    let mut controller = PrayerSessionController::new(ports, selector, settings)?;

    let requested = args.panel_set.map(PanelSetId::new).transpose()?;
    let mut current = controller.start(requested).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !current.state.is_ended() {
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let categories = match entries.list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "could not list categories");
                Vec::new()
            }
        };

        match parse_line(&line, &current, &categories) {
            Ok(ConsoleCommand::Action(action)) => {
                // Failures were already reported through the presenter.
                if let Ok(descriptor) = controller.dispatch(action).await {
                    current = descriptor;
                }
            }
            Ok(ConsoleCommand::Help) => print!("{}> ", HELP),
            Ok(ConsoleCommand::Quit) => break,
            Err(e) => presenter.notify_error(&e.to_string()),
        }
    }

    if !current.state.is_ended() {
        tracing::info!(state = %current.state, "session left before the end");
    }
    Ok(())
}
