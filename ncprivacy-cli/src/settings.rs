//! Optional user settings (`~/.config/ncprivacy/settings.toml`).
//!
//! ```toml
//! db_path = "/path/to/db"          # default for --db-path
//! excludes = ["com.apple.*"]       # always excluded, on top of -e
//! skip_private = true              # hide identifiers starting with "_"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use ncprivacy_db::AppFilter;
use serde::{Deserialize, Serialize};

use crate::cli_types::FilterArgs;
use crate::error::CliError;

/// Environment variable overriding the settings file location.
pub(crate) const CONFIG_ENV: &str = "NCPRIVACY_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    pub excludes: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_private: Option<bool>,
}

impl Settings {
    /// Whether private identifiers are hidden unless `--not-skip-private`.
    pub(crate) fn skip_private(&self) -> bool {
        self.skip_private.unwrap_or(true)
    }

    /// Combine command-line filter flags with the configured defaults.
    pub(crate) fn filter(&self, args: &FilterArgs) -> AppFilter {
        AppFilter {
            include: args.include.clone(),
            exclude: self
                .excludes
                .iter()
                .chain(&args.exclude)
                .cloned()
                .collect(),
            skip_private: self.skip_private() && !args.not_skip_private,
        }
    }
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("ncprivacy").join("settings.toml")
}

/// Load settings from [`settings_path`]. A missing file yields defaults.
pub(crate) fn load_settings() -> Result<Settings, CliError> {
    load_settings_from(&settings_path())
}

pub(crate) fn load_settings_from(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents).map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}
