//! Query and sanitize the macOS Notification Center database.
//!
//! Filters applications by identifier patterns, lists their notification
//! records and deletes or counts their rows across the dependent tables,
//! backed by SQLite (via rusqlite with bundled feature).

pub mod epoch;
pub mod error;
pub mod filter;
pub mod operations;
pub mod path;
pub mod queries;
pub mod schema;
pub mod types;

pub use error::{DbError, DecodeError};
pub use filter::{AppFilter, PRIVATE_GLOB, Predicate};
pub use operations::{count_privacy_records, rm_apps, rm_privacy_records};
pub use path::{resolve_db_path, validate_db_path};
pub use queries::{
    AppQuery, DateRange, RecordQuery, count_apps, list_apps, list_records, resolve_app_ids,
};
pub use schema::{AccessMode, PRIVACY_TABLES, open_database, with_transaction};
pub use types::{App, Payload, PayloadRequest, Record};

pub use rusqlite::Connection;
