pub(crate) mod apps;
pub(crate) mod config;
pub(crate) mod privacy;
pub(crate) mod records;

use std::path::{Path, PathBuf};

use ncprivacy_db::{AccessMode, AppFilter, Connection};

use crate::error::CliError;
use crate::settings::Settings;

/// Everything a database command needs: where the database is, which
/// applications it targets, and how to print results.
pub(crate) struct CommandContext {
    pub db_path: PathBuf,
    pub filter: AppFilter,
    pub json: bool,
}

impl CommandContext {
    pub(crate) fn open(&self, mode: AccessMode) -> Result<Connection, CliError> {
        log::debug!("Opening {} ({mode:?})", self.db_path.display());
        Ok(ncprivacy_db::open_database(&self.db_path, mode)?)
    }
}

/// Pick the database: `--db-path`, then the settings file, then the
/// platform lookup. The chosen file must exist.
pub(crate) fn resolve_db_path(
    cli_override: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf, CliError> {
    let path = match cli_override.or(settings.db_path.as_deref()) {
        Some(path) => ncprivacy_db::validate_db_path(path)?,
        None => ncprivacy_db::resolve_db_path()?,
    };
    log::debug!("Using database {}", path.display());
    Ok(path)
}
