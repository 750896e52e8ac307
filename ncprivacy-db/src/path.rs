//! Location of the notification center database on disk.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::DbError;

/// Path of the database relative to the per-user runtime directory.
pub const DB_SUBPATH: [&str; 3] = ["com.apple.notificationcenter", "db2", "db"];

const GETCONF: &str = "getconf";

/// Resolve and validate the notification database of the current user.
///
/// Asks `getconf DARWIN_USER_DIR` for the per-user runtime directory and
/// appends [`DB_SUBPATH`]. Fails with [`DbError::PathNotFound`] when the
/// lookup is unavailable or the resulting file does not exist.
pub fn resolve_db_path() -> Result<PathBuf, DbError> {
    let user_dir = darwin_user_dir()?;
    validate_db_path(&db_path_in(&user_dir))
}

/// Join the fixed database subpath onto a runtime directory.
pub fn db_path_in(user_dir: &Path) -> PathBuf {
    DB_SUBPATH.iter().fold(user_dir.to_path_buf(), |path, part| path.join(part))
}

/// Check that `path` names an existing file.
pub fn validate_db_path(path: &Path) -> Result<PathBuf, DbError> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(DbError::path_not_found(format!("{} not found", path.display())))
    }
}

fn darwin_user_dir() -> Result<PathBuf, DbError> {
    let output = Command::new(GETCONF)
        .arg("DARWIN_USER_DIR")
        .output()
        .map_err(|e| DbError::path_not_found(format!("{GETCONF} unavailable: {e}")))?;

    if !output.status.success() {
        return Err(DbError::path_not_found(format!(
            "{GETCONF} DARWIN_USER_DIR failed ({})",
            output.status
        )));
    }

    let dir = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    if dir.is_empty() {
        return Err(DbError::path_not_found(format!(
            "{GETCONF} DARWIN_USER_DIR returned nothing"
        )));
    }
    log::debug!("DARWIN_USER_DIR = {dir}");
    Ok(PathBuf::from(dir))
}
