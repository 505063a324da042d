use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file.
///
/// All settings are startup-only; nothing here changes while a game is in
/// progress.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Playfield dimensions
    pub(crate) grid: GridConfig,

    /// Tick cadence settings
    pub(crate) timing: TimingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, the default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if its contents could not
    /// be deserialized, or if the resulting configuration is invalid.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width < consts::MIN_GRID_WIDTH || self.grid.height < consts::MIN_GRID_HEIGHT {
            return Err(ConfigError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
            });
        }
        if self.timing.base_tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if !self.timing.speedup.is_finite() || self.timing.speedup < 0.0 {
            return Err(ConfigError::BadSpeedup(self.timing.speedup));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GridConfig {
    /// Playfield width in cells
    pub(crate) width: u16,

    /// Playfield height in cells
    pub(crate) height: u16,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: consts::DEFAULT_GRID_WIDTH,
            height: consts::DEFAULT_GRID_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct TimingConfig {
    /// Milliseconds between ticks at score zero
    pub(crate) base_tick_ms: u64,

    /// Score coefficient in the tick-interval divisor
    pub(crate) speedup: f64,
}

impl Default for TimingConfig {
    fn default() -> TimingConfig {
        TimingConfig {
            base_tick_ms: consts::DEFAULT_BASE_TICK_MS,
            speedup: consts::DEFAULT_SPEEDUP,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error(
        "grid size {width}x{height} is below the {min_w}x{min_h} minimum",
        min_w = consts::MIN_GRID_WIDTH,
        min_h = consts::MIN_GRID_HEIGHT
    )]
    GridTooSmall { width: u16, height: u16 },
    #[error("base-tick-ms must be at least 1")]
    ZeroTick,
    #[error("speedup must be a finite non-negative number, not {0}")]
    BadSpeedup(f64),
}
