// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use directories::BaseDirs;

/// ---------------------------------------------------------------------------------------------
///  Top-level Config Structure
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub scratch: ScratchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            scratch: ScratchConfig::default(),
        }
    }
}

/// ---------------------------------------------------------------------------------------------
///  Scratch file
/// ---------------------------------------------------------------------------------------------
/// Where the editor writes when started without a file argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl ScratchConfig {
    /// Resolve the scratch path: the configured override if present,
    /// otherwise `ted.scratch` in the user's home directory, otherwise a
    /// relative fallback in the working directory.
    #[must_use]
    pub fn resolve(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| {
            BaseDirs::new().map_or_else(
                || PathBuf::from("ted.scratch"),
                |base| base.home_dir().join("ted.scratch"),
            )
        })
    }
}

/// ---------------------------------------------------------------------------------------------
///  Partial config (for layered merging)
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigPartial {
    pub version: Option<u32>,
    pub scratch: Option<ScratchConfig>,
}

impl Config {
    fn apply_partial(&mut self, partial: ConfigPartial) {
        if let Some(v) = partial.version {
            self.version = v;
        }
        if let Some(scratch) = partial.scratch {
            self.scratch = scratch;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 {
            return Err(ConfigError::Validation("version must be >= 1".to_string()));
        }

        Ok(())
    }
}

/// ---------------------------------------------------------------------------------------------
///  Errors
/// ---------------------------------------------------------------------------------------------
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// ---------------------------------------------------------------------------------------------
///  Public loader
/// ---------------------------------------------------------------------------------------------
/// Loads the configuration by applying layers in the following order (later layers override
/// earlier ones): defaults, the user config file, a `TED_CONFIG=` override, an explicit path.
///
/// # Errors
/// Returns `ConfigError` if any config file cannot be read or parsed, or if the final config
/// is invalid.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    // 1. Platform-specific user config
    if let Some(user_path) = user_config_path()
        && user_path.is_file()
    {
        let partial = load_partial(&user_path)?;
        cfg.apply_partial(partial);
    }

    // 2. TED_CONFIG= override
    if let Ok(env_path) = env::var("TED_CONFIG") {
        let path = PathBuf::from(env_path);
        if path.is_file() {
            let partial = load_partial(&path)?;
            cfg.apply_partial(partial);
        }
    }

    // 3. Explicit CLI override
    if let Some(path) = explicit_path
        && path.is_file()
    {
        let partial = load_partial(path)?;
        cfg.apply_partial(partial);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// ---------------------------------------------------------------------------------------------
///  Helpers
/// ---------------------------------------------------------------------------------------------
fn load_partial(path: &Path) -> Result<ConfigPartial, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// User config path: `$XDG_CONFIG_HOME/ted/config.toml` (or the platform
/// equivalent via `BaseDirs`).
fn user_config_path() -> Option<PathBuf> {
    let base = BaseDirs::new()?;

    let mut p = base.config_dir().join("ted");
    create_dir_if_missing(&p);
    p.push("config.toml");
    Some(p)
}

fn create_dir_if_missing(path: &Path) {
    if !path.exists() {
        let _ = fs::create_dir_all(path);
    }
}
