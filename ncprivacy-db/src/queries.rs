//! Read queries: the application resolver and the record query engine.
//!
//! [`AppQuery`] and [`RecordQuery`] are lazy cursors. Each owns a prepared
//! statement borrowed from the connection; rows are stepped only as the
//! iterator is consumed, and the statement is finalized when the query value
//! is dropped, however iteration ends.

use chrono::{DateTime, Utc};
use regex::Regex;
use rusqlite::types::Value;
use rusqlite::{Connection, Statement, params_from_iter};

use crate::epoch;
use crate::error::DbError;
use crate::filter::{AppFilter, Predicate, where_clause};
use crate::schema::{app, record};
use crate::types::{App, Record};

// ── Applications ────────────────────────────────────────────────────────────

/// Lazy cursor over the applications matching a filter, in storage order.
pub struct AppQuery<'conn> {
    stmt: Statement<'conn>,
    params: Vec<Value>,
}

impl<'conn> AppQuery<'conn> {
    pub fn prepare(conn: &'conn Connection, filter: &AppFilter) -> Result<Self, DbError> {
        let (clause, params) = where_clause(filter.predicate(app::IDENTIFIER));
        let sql = format!(
            "SELECT {}, {} FROM {}{clause}",
            app::APP_ID,
            app::IDENTIFIER,
            app::TABLE
        );
        log::debug!("{sql}");
        let stmt = conn.prepare(&sql)?;
        Ok(Self { stmt, params })
    }

    /// Run the query. Each call starts a fresh pass over the table.
    pub fn iter(&mut self) -> Result<impl Iterator<Item = Result<App, DbError>> + '_, DbError> {
        let rows = self
            .stmt
            .query_map(params_from_iter(self.params.iter()), row_to_app)?;
        Ok(rows.map(|row| row.map_err(DbError::from)))
    }
}

/// Collect every application matching `filter`.
pub fn list_apps(conn: &Connection, filter: &AppFilter) -> Result<Vec<App>, DbError> {
    let mut query = AppQuery::prepare(conn, filter)?;
    let apps: Result<Vec<App>, DbError> = query.iter()?.collect();
    apps
}

/// Count the applications matching `filter` with `COUNT(*)`.
pub fn count_apps(conn: &Connection, filter: &AppFilter) -> Result<u64, DbError> {
    let (clause, params) = where_clause(filter.predicate(app::IDENTIFIER));
    let sql = format!("SELECT COUNT(*) FROM {}{clause}", app::TABLE);
    log::debug!("{sql}");
    let count: i64 = conn.query_row(&sql, params_from_iter(params.iter()), |row| row.get(0))?;
    Ok(count as u64)
}

/// Resolve `filter` to the concrete set of matching `app_id`s.
pub fn resolve_app_ids(conn: &Connection, filter: &AppFilter) -> Result<Vec<i64>, DbError> {
    let mut query = AppQuery::prepare(conn, filter)?;
    let ids = query
        .iter()?
        .map(|app| app.map(|a| a.app_id))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Filter resolved to {} app id(s): {:?}", ids.len(), ids);
    Ok(ids)
}

// ── Records ─────────────────────────────────────────────────────────────────

/// Inclusive bounds on `record.delivered_date`.
///
/// Records that were never delivered (`NULL` date) fall outside every
/// bounded range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<DateTime<Utc>>,
    stop: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Unbounded range: matches every record, delivered or not.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<DateTime<Utc>>, stop: Option<DateTime<Utc>>) -> Result<Self, DbError> {
        if let (Some(start), Some(stop)) = (start, stop) {
            if start > stop {
                return Err(DbError::invalid_argument(format!(
                    "start date {} is after stop date {}",
                    start.to_rfc3339(),
                    stop.to_rfc3339()
                )));
            }
        }
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.start
    }

    pub fn stop(&self) -> Option<DateTime<Utc>> {
        self.stop
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() || self.stop.is_some()
    }

    /// Predicate over `column` in platform-epoch seconds.
    pub fn predicate(&self, column: &str) -> Option<Predicate> {
        if !self.is_bounded() {
            return None;
        }
        let mut parts = vec![Predicate::new(format!("{column} IS NOT NULL"), vec![])];
        if let Some(start) = self.start {
            parts.push(Predicate::new(
                format!("{column} >= ?"),
                vec![Value::Real(epoch::from_datetime(start))],
            ));
        }
        if let Some(stop) = self.stop {
            parts.push(Predicate::new(
                format!("{column} <= ?"),
                vec![Value::Real(epoch::from_datetime(stop))],
            ));
        }
        Predicate::all(parts)
    }
}

/// Lazy cursor over notification records in storage (or join) order.
///
/// The `app` table is joined only when the filter restricts identifiers;
/// an empty filter scans `record` alone.
pub struct RecordQuery<'conn> {
    stmt: Statement<'conn>,
    params: Vec<Value>,
    search: Option<Regex>,
}

impl<'conn> RecordQuery<'conn> {
    pub fn prepare(
        conn: &'conn Connection,
        filter: &AppFilter,
        range: &DateRange,
    ) -> Result<Self, DbError> {
        let columns = [
            record::REC_ID,
            record::APP_ID,
            record::UUID,
            record::DATA,
            record::DELIVERED_DATE,
            record::PRESENTED,
        ]
        .iter()
        .map(|c| format!("{}.{c}", record::TABLE))
        .collect::<Vec<_>>()
        .join(", ");

        let mut sql = format!("SELECT {columns} FROM {}", record::TABLE);

        let app_pred = filter.predicate(&format!("{}.{}", app::TABLE, app::IDENTIFIER));
        if app_pred.is_some() {
            sql.push_str(&format!(
                " JOIN {app} ON {rec}.{rec_app_id} = {app}.{app_id}",
                app = app::TABLE,
                rec = record::TABLE,
                rec_app_id = record::APP_ID,
                app_id = app::APP_ID,
            ));
        }
        let date_pred =
            range.predicate(&format!("{}.{}", record::TABLE, record::DELIVERED_DATE));

        let (clause, params) = where_clause(Predicate::all(app_pred.into_iter().chain(date_pred)));
        sql.push_str(&clause);
        log::debug!("{sql}");

        let stmt = conn.prepare(&sql)?;
        Ok(Self {
            stmt,
            params,
            search: None,
        })
    }

    /// Keep only records whose decoded title, subtitle or body matches.
    pub fn with_search(mut self, pattern: Regex) -> Self {
        self.search = Some(pattern);
        self
    }

    /// Run the query. Each call starts a fresh pass.
    pub fn iter(
        &mut self,
    ) -> Result<impl Iterator<Item = Result<Record, DbError>> + '_, DbError> {
        let search = self.search.as_ref();
        let rows = self
            .stmt
            .query_map(params_from_iter(self.params.iter()), row_to_record)?;
        Ok(rows
            .map(|row| row.map_err(DbError::from))
            .filter(move |row| match (row, search) {
                (Ok(rec), Some(pattern)) => rec.content_matches(pattern),
                _ => true,
            }))
    }
}

/// Collect every record matching `filter` and `range`.
pub fn list_records(
    conn: &Connection,
    filter: &AppFilter,
    range: &DateRange,
) -> Result<Vec<Record>, DbError> {
    let mut query = RecordQuery::prepare(conn, filter, range)?;
    let records: Result<Vec<Record>, DbError> = query.iter()?.collect();
    records
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_app(row: &rusqlite::Row<'_>) -> rusqlite::Result<App> {
    Ok(App {
        app_id: row.get(0)?,
        identifier: row.get(1)?,
    })
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        rec_id: row.get(0)?,
        app_id: row.get(1)?,
        uuid: row.get(2)?,
        data: row.get(3)?,
        delivered_date: row.get(4)?,
        presented: row.get(5)?,
    })
}
