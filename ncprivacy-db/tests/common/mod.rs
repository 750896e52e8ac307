//! Fixture database mirroring the columns the crate consumes.

#![allow(dead_code)]

use std::path::PathBuf;

use ncprivacy_db::{AccessMode, Payload, PayloadRequest, open_database};
use rusqlite::{Connection, params};
use tempfile::TempDir;

const FIXTURE_SQL: &str = r#"
CREATE TABLE app (
    app_id INTEGER PRIMARY KEY,
    identifier VARCHAR,
    badge INTEGER NULL,
    UNIQUE (identifier)
);
CREATE TABLE record (
    rec_id INTEGER PRIMARY KEY,
    app_id INTEGER,
    uuid BLOB,
    data BLOB,
    request_date REAL,
    delivered_date REAL,
    presented Bool,
    style INTEGER
);
CREATE TABLE delivered (app_id INTEGER PRIMARY KEY, list BLOB);
CREATE TABLE displayed (app_id INTEGER PRIMARY KEY, list BLOB);
CREATE TABLE requests (app_id INTEGER PRIMARY KEY, list BLOB);
CREATE TABLE snoozed (app_id INTEGER PRIMARY KEY, list BLOB);
"#;

/// A notification database in a temp directory. The directory lives as
/// long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// Empty schema, no rows.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(FIXTURE_SQL).unwrap();
        Self { _dir: dir, path }
    }

    /// Four applications:
    ///
    /// | app_id | identifier          | records (delivered_date) | dependents |
    /// |--------|---------------------|--------------------------|------------|
    /// | 1      | _system             | 1 (100.0)                | yes        |
    /// | 2      | com.example.App     | 2 (1000.0), 3 (pending)  | yes        |
    /// | 3      | com.apple.Safari    | 4 (2000.0)               | yes        |
    /// | 4      | org.mozilla.firefox | none                     | no         |
    pub fn standard() -> Self {
        let fixture = Self::empty();
        let conn = fixture.rw();
        insert_app(&conn, 1, "_system");
        insert_app(&conn, 2, "com.example.App");
        insert_app(&conn, 3, "com.apple.Safari");
        insert_app(&conn, 4, "org.mozilla.firefox");
        insert_record(&conn, 1, 1, Some(100.0), "Software Update");
        insert_record(&conn, 2, 2, Some(1000.0), "Hello from Example");
        insert_record(&conn, 3, 2, None, "Still pending");
        insert_record(&conn, 4, 3, Some(2000.0), "Download finished");
        for app_id in [1, 2, 3] {
            insert_dependents(&conn, app_id);
        }
        fixture
    }

    pub fn rw(&self) -> Connection {
        open_database(&self.path, AccessMode::ReadWrite).unwrap()
    }

    pub fn ro(&self) -> Connection {
        open_database(&self.path, AccessMode::ReadOnly).unwrap()
    }
}

pub fn insert_app(conn: &Connection, app_id: i64, identifier: &str) {
    conn.execute(
        "INSERT INTO app (app_id, identifier) VALUES (?1, ?2)",
        params![app_id, identifier],
    )
    .unwrap();
}

pub fn insert_record(
    conn: &Connection,
    rec_id: i64,
    app_id: i64,
    delivered_date: Option<f64>,
    title: &str,
) {
    let payload = Payload {
        app: Some(format!("app-{app_id}")),
        req: Some(PayloadRequest {
            titl: Some(title.to_string()),
            subt: None,
            body: Some(format!("body of record {rec_id}")),
        }),
    };
    let mut data = Vec::new();
    plist::to_writer_binary(&mut data, &payload).unwrap();
    let uuid = (rec_id as u128).to_be_bytes().to_vec();
    conn.execute(
        "INSERT INTO record (rec_id, app_id, uuid, data, delivered_date, presented)
         VALUES (?1, ?2, ?3, ?4, ?5, 1)",
        params![rec_id, app_id, uuid, data, delivered_date],
    )
    .unwrap();
}

/// One row per app in each of delivered/displayed/requests/snoozed.
pub fn insert_dependents(conn: &Connection, app_id: i64) {
    for table in ["delivered", "displayed", "requests", "snoozed"] {
        conn.execute(
            &format!("INSERT INTO {table} (app_id, list) VALUES (?1, x'00')"),
            params![app_id],
        )
        .unwrap();
    }
}

pub fn table_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

pub fn rows_for_app(conn: &Connection, table: &str, app_id: i64) -> i64 {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {table} WHERE app_id = ?1"),
        [app_id],
        |row| row.get(0),
    )
    .unwrap()
}
