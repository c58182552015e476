mod app;
mod keys;
mod logging;
mod sampler;
mod signals;
mod terminal;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::backend::CrosstermBackend;

use sysdash_core::config::{ConfigError, DashboardConfig};

use app::Dashboard;
use keys::CrosstermKeys;
use sampler::SystemSampler;
use signals::OsSignaler;
use terminal::{CrosstermModes, TerminalSession};

#[derive(Parser, Debug)]
#[command(name = "sysdash")]
#[command(about = "Interactive process and system dashboard", long_about = None)]
struct Cli {
    /// Config file; skips discovery
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// Pause after each handled key, in milliseconds
    #[arg(long)]
    frame_delay_ms: Option<u64>,
}

/// Config file (explicit or discovered) with command line overrides on top.
fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => match DashboardConfig::discover() {
            Ok((_, config)) => config,
            Err(ConfigError::NotFound { .. }) => DashboardConfig::default(),
            Err(e) => return Err(e).context("failed to load discovered config"),
        },
    };

    apply_overrides(&mut config, cli);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut DashboardConfig, cli: &Cli) {
    if let Some(file) = &cli.log_file {
        config.log.file = Some(file.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if let Some(delay) = cli.frame_delay_ms {
        config.frame_delay_ms = delay;
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    logging::init(&config.log)?;
    log::info!("starting sysdash, frame delay {:?}", config.frame_delay());

    let mut session = TerminalSession::acquire(CrosstermBackend::new(io::stdout()), CrosstermModes)
        .context("failed to initialise terminal")?;

    let mut dashboard = Dashboard::new(
        SystemSampler::new(),
        OsSignaler,
        std::process::id(),
        config.frame_delay(),
    );
    let result = dashboard.run(&mut session, &mut CrosstermKeys);
    let released = session.release();

    result.context("dashboard loop failed")?;
    released.context("failed to restore terminal")?;
    Ok(())
}
