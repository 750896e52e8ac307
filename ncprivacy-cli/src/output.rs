//! Presentation of command results: tables, JSON and record listings.

use ncprivacy_db::{App, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::error::CliError;

const DELIMITER: &str = " | ";

/// Render rows as an aligned table with upper-case headers.
///
/// Each line is framed by the delimiter, e.g. ` | APP_ID | IDENTIFIER | `.
/// Returns an empty string when there are no rows.
pub(crate) fn format_table(fields: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let widths: Vec<usize> = fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            rows.iter()
                .filter_map(|row| row.get(idx))
                .map(|val| val.chars().count())
                .max()
                .unwrap_or(0)
                .max(field.len())
        })
        .collect();

    let line = |cells: Vec<String>| -> String {
        let body = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:width$}"))
            .collect::<Vec<_>>()
            .join(DELIMITER);
        format!("{DELIMITER}{body}{DELIMITER}")
    };

    let mut out = vec![line(fields.iter().map(|f| f.to_uppercase()).collect())];
    out.extend(rows.iter().map(|row| line(row.clone())));
    out.join("\n")
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_apps(apps: &[App], as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(apps);
    }
    let rows: Vec<Vec<String>> = apps
        .iter()
        .map(|app| vec![app.app_id.to_string(), app.identifier.clone()])
        .collect();
    let table = format_table(&["app_id", "identifier"], &rows);
    if !table.is_empty() {
        println!("{table}");
    }
    Ok(())
}

pub(crate) fn print_deleted(count: u64, as_json: bool) -> Result<(), CliError> {
    if as_json {
        print_json(&count)
    } else {
        println!("Deleted: {count}");
        Ok(())
    }
}

pub(crate) fn print_count(count: u64, as_json: bool) -> Result<(), CliError> {
    if as_json {
        print_json(&count)
    } else {
        println!("{count}");
        Ok(())
    }
}

/// A record with its payload, UUID and date decoded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RecordView {
    pub rec_id: i64,
    pub app_id: i64,
    pub uuid: Option<String>,
    pub delivered_date: Option<f64>,
    pub presented: Option<i64>,
    pub app: Option<String>,
    pub titl: Option<String>,
    pub subt: Option<String>,
    pub body: Option<String>,
}

impl RecordView {
    pub(crate) fn from_record(record: &Record) -> Self {
        let uuid = match record.uuid() {
            Ok(uuid) => Some(uuid.to_string()),
            Err(e) => {
                log::warn!("rec_id {}: {e}", record.rec_id);
                None
            }
        };
        let payload = record.payload().unwrap_or_else(|e| {
            log::warn!("rec_id {}: {e}", record.rec_id);
            Default::default()
        });
        Self {
            rec_id: record.rec_id,
            app_id: record.app_id,
            uuid,
            delivered_date: record.delivered_date,
            presented: record.presented,
            titl: payload.title().map(str::to_string),
            subt: payload.subtitle().map(str::to_string),
            body: payload.body().map(str::to_string),
            app: payload.app,
        }
    }
}

/// Text block for the `num`-th listed record.
pub(crate) fn format_record(num: usize, record: &Record, view: &RecordView) -> String {
    let delivered = record
        .delivered_at()
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "None".to_string());
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "None".to_string());

    [
        format!("{}", format!("#{num}").if_supports_color(Stdout, |t| t.bold())),
        format!("Delivered date: {delivered}"),
        format!("Application: {}", show(&view.app)),
        format!("Title: {}", show(&view.titl)),
        format!("Subtitle: {}", show(&view.subt)),
        format!("Body: {}", show(&view.body)),
    ]
    .join("\n")
}
