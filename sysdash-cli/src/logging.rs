use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use sysdash_core::config::LogConfig;

/// Install the global logger.
///
/// The dashboard owns stdout and stderr, so records only go to the
/// configured file; without one, logging stays off. `RUST_LOG` overrides the
/// configured level.
pub fn init(config: &LogConfig) -> Result<()> {
    let Some(path) = config.file.as_deref() else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = open_log(path)?;
    builder(config.level_filter(), file)
        .try_init()
        .context("logger already initialised")?;
    log::info!("logging to {} at {}", path.display(), config.level);
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

/// `level` is the default; `RUST_LOG` directives are parsed after it and win.
fn builder(level: LevelFilter, file: File) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::default())
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis();
    builder
}
