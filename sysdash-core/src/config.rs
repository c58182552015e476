use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "SYSDASH_CONFIG";

const CONFIG_NAMES: [&str; 4] = [
    "sysdash.yaml",
    "sysdash.yml",
    ".sysdash.yaml",
    ".sysdash.yml",
];

/// Longest pause allowed between handled keys
const MAX_FRAME_DELAY_MS: u64 = 1000;

/// Log output settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LogConfig {
    /// File the log is appended to. Logging is off when unset, the
    /// dashboard owns the terminal.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Parsed level; only valid after [`DashboardConfig::validate`].
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

/// Root configuration file structure
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Pause after each handled key press, in milliseconds
    #[serde(default = "default_frame_delay")]
    pub frame_delay_ms: u64,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_frame_delay() -> u64 {
    50
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: default_frame_delay(),
            log: LogConfig::default(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("no config file found, searched: {searched:?}")]
    NotFound { searched: Vec<PathBuf> },
}

impl DashboardConfig {
    /// Load configuration from a file.
    ///
    /// Values are not range-checked here so command line overrides can still
    /// replace them; call [`validate`](Self::validate) once they are applied.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from a string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        // an empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(DashboardConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Search the standard locations, honouring `$SYSDASH_CONFIG` first.
    pub fn discover() -> Result<(PathBuf, Self), ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let home = std::env::var_os("HOME").map(PathBuf::from);
        let cwd = std::env::current_dir()?;
        Self::discover_in(explicit, &cwd, home.as_deref())
    }

    /// Search order: explicit path, then `dir`, then `~/.config/sysdash/config.yaml`.
    pub fn discover_in(
        explicit: Option<PathBuf>,
        dir: &Path,
        home: Option<&Path>,
    ) -> Result<(PathBuf, Self), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load(&path)?;
            return Ok((path, config));
        }

        let mut candidates: Vec<PathBuf> = CONFIG_NAMES.iter().map(|n| dir.join(n)).collect();
        if let Some(home) = home {
            candidates.push(home.join(".config").join("sysdash").join("config.yaml"));
        }

        for path in &candidates {
            if path.is_file() {
                let config = Self::load(path)?;
                return Ok((path.clone(), config));
            }
        }

        Err(ConfigError::NotFound {
            searched: candidates,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_delay_ms > MAX_FRAME_DELAY_MS {
            return Err(ConfigError::Invalid {
                field: "frame_delay_ms",
                reason: format!(
                    "{} exceeds the maximum of {}",
                    self.frame_delay_ms, MAX_FRAME_DELAY_MS
                ),
            });
        }

        if log::LevelFilter::from_str(&self.log.level).is_err() {
            return Err(ConfigError::Invalid {
                field: "log.level",
                reason: format!(
                    "'{}' is not one of off, error, warn, info, debug, trace",
                    self.log.level
                ),
            });
        }

        Ok(())
    }

    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_delay_ms)
    }
}
