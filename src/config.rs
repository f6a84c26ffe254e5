//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/meihua/meihua.toml`
//! 3. Local config: `<dir>/.meihua.toml` (current directory by default)
//! 4. Environment variables: `MEIHUA_*` prefix

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Which wall clock seeds a casting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    #[default]
    Local,
    Utc,
}

impl FromStr for ClockSource {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ClockSource::Local),
            "utc" => Ok(ClockSource::Utc),
            other => Err(ApplicationError::Config {
                message: format!("unknown clock '{other}' (expected local or utc)"),
            }),
        }
    }
}

/// Default output of `cast`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ApplicationError::Config {
                message: format!("unknown format '{other}' (expected text or json)"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub clock: Option<ClockSource>,
    pub format: Option<OutputFormat>,
    pub show_nuclear: Option<bool>,
}

/// Unified configuration for meihua.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Wall clock used to seed a casting (default: local)
    pub clock: ClockSource,
    /// Output format of `cast` (default: text)
    pub format: OutputFormat,
    /// Draw the nuclear hexagram in text output (default: true)
    pub show_nuclear: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clock: ClockSource::Local,
            format: OutputFormat::Text,
            show_nuclear: true,
        }
    }
}

/// Get the XDG config directory for meihua.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "meihua").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("meihua.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".meihua.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            clock: overlay.clock.unwrap_or(self.clock),
            format: overlay.format.unwrap_or(self.format),
            show_nuclear: overlay.show_nuclear.unwrap_or(self.show_nuclear),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Directory holding `.meihua.toml` (None: skip local config)
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/meihua/meihua.toml`
    /// 3. Local config: `<local_dir>/.meihua.toml`
    /// 4. Environment variables: `MEIHUA_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply MEIHUA_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(Environment::with_prefix("MEIHUA").separator("__"))
            .build()
            .map_err(config_err)?;

        settings.apply_overrides(&config)
    }

    /// Apply the keys set in `config`; unset keys keep their value, malformed ones are errors.
    fn apply_overrides(mut self, config: &Config) -> Result<Self, ApplicationError> {
        if let Some(val) = optional(config.get_string("clock"))? {
            self.clock = val.parse()?;
        }
        if let Some(val) = optional(config.get_string("format"))? {
            self.format = val.parse()?;
        }
        if let Some(val) = optional(config.get_bool("show_nuclear"))? {
            self.show_nuclear = val;
        }

        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# meihua configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/meihua/meihua.toml
#   Local:  ./.meihua.toml
#   Env:    MEIHUA_* environment variables (e.g. MEIHUA_CLOCK=utc)

# Wall clock used to seed a casting: "local" or "utc"
# clock = "local"

# Default output of `meihua cast`: "text" or "json"
# format = "text"

# Draw the nuclear hexagram in text output
# show_nuclear = true
"#
        .to_string()
    }
}

/// Treat a missing key as `None`, every other lookup failure as a config error.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
