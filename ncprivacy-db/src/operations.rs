//! Destructive operations and the privacy sweep across dependent tables.

use rusqlite::{Connection, params_from_iter};

use crate::error::DbError;
use crate::filter::{AppFilter, Predicate, where_clause};
use crate::queries::resolve_app_ids;
use crate::schema::{PRIVACY_TABLES, app, with_transaction};

/// Delete the applications matching `filter`. Returns the deleted row count.
///
/// Dependent rows are left to the database's own `app_deleted` trigger.
pub fn rm_apps(conn: &Connection, filter: &AppFilter) -> Result<u64, DbError> {
    with_transaction(conn, |conn| {
        let (clause, params) = where_clause(filter.predicate(app::IDENTIFIER));
        let sql = format!("DELETE FROM {}{clause}", app::TABLE);
        log::debug!("{sql}");
        let deleted = conn.execute(&sql, params_from_iter(params.iter()))?;
        Ok(deleted as u64)
    })
}

/// Count rows belonging to the matching applications across
/// [`PRIVACY_TABLES`].
pub fn count_privacy_records(conn: &Connection, filter: &AppFilter) -> Result<u64, DbError> {
    with_transaction(conn, |conn| sweep(conn, filter, Sweep::Count))
}

/// Delete rows belonging to the matching applications from every table in
/// [`PRIVACY_TABLES`]. Returns the summed deleted row count.
///
/// All five deletes commit together; any failure rolls every table back.
pub fn rm_privacy_records(conn: &Connection, filter: &AppFilter) -> Result<u64, DbError> {
    with_transaction(conn, |conn| sweep(conn, filter, Sweep::Delete))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sweep {
    Count,
    Delete,
}

fn sweep(conn: &Connection, filter: &AppFilter, action: Sweep) -> Result<u64, DbError> {
    // One resolution for all tables. An empty id set stays `IN ()`.
    let scope = if filter.is_empty() {
        None
    } else {
        Some(Predicate::in_ids(
            app::APP_ID,
            &resolve_app_ids(conn, filter)?,
        ))
    };

    let mut total = 0;
    for table in PRIVACY_TABLES {
        let rows = sweep_table(conn, table, scope.clone(), action)?;
        log::debug!("{action:?} {table}: {rows}");
        total += rows;
    }
    Ok(total)
}

/// Count or delete the rows of one table, optionally restricted by app id.
///
/// `table` must be one of the crate's table constants.
fn sweep_table(
    conn: &Connection,
    table: &'static str,
    scope: Option<Predicate>,
    action: Sweep,
) -> Result<u64, DbError> {
    let (clause, params) = where_clause(scope);
    let params = params_from_iter(params.iter());
    let rows = match action {
        Sweep::Count => {
            let sql = format!("SELECT COUNT(*) FROM {table}{clause}");
            conn.query_row(&sql, params, |row| row.get::<_, i64>(0))? as u64
        }
        Sweep::Delete => {
            let sql = format!("DELETE FROM {table}{clause}");
            conn.execute(&sql, params)? as u64
        }
    };
    Ok(rows)
}
