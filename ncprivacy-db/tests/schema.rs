mod common;

use common::{Fixture, table_count};
use ncprivacy_db::*;

#[test]
fn open_missing_file_fails_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    for mode in [AccessMode::ReadOnly, AccessMode::ReadWrite] {
        let err = open_database(&path, mode).unwrap_err();
        assert!(matches!(err, DbError::Open { .. }), "{mode:?}");
    }
    assert!(!path.exists());
}

#[test]
fn open_non_database_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::write(&path, b"this is not an sqlite database, just some text").unwrap();
    let err = open_database(&path, AccessMode::ReadOnly).unwrap_err();
    assert!(matches!(err, DbError::Open { .. }));
}

#[test]
fn read_only_connection_cannot_write() {
    let fixture = Fixture::standard();
    let conn = fixture.ro();
    assert!(conn.execute("DELETE FROM app", []).is_err());
    assert_eq!(table_count(&conn, "app"), 4);
}

#[test]
fn privacy_tables_are_fixed() {
    assert_eq!(
        PRIVACY_TABLES,
        ["record", "delivered", "displayed", "requests", "snoozed"]
    );
}

#[test]
fn with_transaction_commits_on_success() {
    let fixture = Fixture::standard();
    let conn = fixture.rw();
    let deleted = with_transaction(&conn, |conn| {
        Ok(conn.execute("DELETE FROM delivered", [])?)
    })
    .unwrap();
    assert_eq!(deleted, 3);
    assert!(conn.is_autocommit());
    assert_eq!(table_count(&fixture.ro(), "delivered"), 0);
}

#[test]
fn with_transaction_rolls_back_on_error() {
    let fixture = Fixture::standard();
    let conn = fixture.rw();
    let result: Result<(), DbError> = with_transaction(&conn, |conn| {
        conn.execute("DELETE FROM delivered", [])?;
        Err(DbError::invalid_argument("abort"))
    });
    assert!(result.is_err());
    assert_eq!(table_count(&conn, "delivered"), 3);
}

#[test]
fn validate_db_path_accepts_existing_file() {
    let fixture = Fixture::empty();
    assert_eq!(validate_db_path(&fixture.path).unwrap(), fixture.path);
}
