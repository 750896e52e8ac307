//! Consumed schema and the connection/transaction adapter.
//!
//! The notification database is owned by the OS notification process. This
//! crate never creates or migrates tables; it only names the ones it reads
//! and deletes from.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::DbError;

/// Application table: one row per notification source.
pub mod app {
    pub const TABLE: &str = "app";
    pub const APP_ID: &str = "app_id";
    pub const IDENTIFIER: &str = "identifier";
}

/// Delivered/queued notification records.
pub mod record {
    pub const TABLE: &str = "record";
    pub const REC_ID: &str = "rec_id";
    pub const APP_ID: &str = "app_id";
    pub const UUID: &str = "uuid";
    pub const DATA: &str = "data";
    pub const DELIVERED_DATE: &str = "delivered_date";
    pub const PRESENTED: &str = "presented";
}

/// Tables swept by the privacy delete/count, in sweep order.
///
/// Each has an `app_id` column; nothing else about them is assumed.
pub const PRIVACY_TABLES: [&str; 5] = [
    record::TABLE,
    "delivered",
    "displayed",
    "requests",
    "snoozed",
];

/// How a connection is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    /// Read-write on an existing file. Never creates the database.
    ReadWrite,
}

/// Open the notification database at `path` in the given mode.
pub fn open_database(path: &Path, mode: AccessMode) -> Result<Connection, DbError> {
    let access = match mode {
        AccessMode::ReadOnly => OpenFlags::SQLITE_OPEN_READ_ONLY,
        AccessMode::ReadWrite => OpenFlags::SQLITE_OPEN_READ_WRITE,
    };
    let flags = access | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    let open_err = |source| DbError::Open {
        path: path.to_path_buf(),
        source,
    };

    let conn = Connection::open_with_flags(path, flags).map_err(open_err)?;
    // SQLite reads the header lazily; touch it so a locked or non-database
    // file fails here rather than halfway through a command.
    conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
        row.get::<_, i64>(0)
    })
    .map_err(open_err)?;

    log::debug!("Opened {} ({:?})", path.display(), mode);
    Ok(conn)
}

const SAVEPOINT: &str = "ncprivacy_sweep";

/// Run `f` atomically.
///
/// Opens a transaction when the connection is in autocommit mode and commits
/// it if `f` succeeds; on error the transaction is dropped and rolled back.
/// When the caller already holds a transaction, `f` runs under a savepoint
/// inside it, so a failure undoes only the work of `f` and leaves the
/// caller's transaction open.
pub fn with_transaction<T>(
    conn: &Connection,
    f: impl FnOnce(&Connection) -> Result<T, DbError>,
) -> Result<T, DbError> {
    if !conn.is_autocommit() {
        conn.execute_batch(&format!("SAVEPOINT {SAVEPOINT}"))?;
        return match f(conn) {
            Ok(result) => {
                conn.execute_batch(&format!("RELEASE {SAVEPOINT}"))?;
                Ok(result)
            }
            Err(e) => {
                conn.execute_batch(&format!(
                    "ROLLBACK TO {SAVEPOINT}; RELEASE {SAVEPOINT}"
                ))?;
                Err(e)
            }
        };
    }

    let tx = conn.unchecked_transaction()?;
    let result = f(&*tx)?;
    tx.commit()?;
    Ok(result)
}
