//! Row types read from the notification database.

use std::io::Cursor;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::epoch;
use crate::error::DecodeError;

/// A notification source from the `app` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct App {
    pub app_id: i64,
    pub identifier: String,
}

/// A notification from the `record` table.
///
/// `data`, `uuid` and `delivered_date` are kept raw; the accessors decode
/// them on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub rec_id: i64,
    pub app_id: i64,
    pub uuid: Vec<u8>,
    pub data: Vec<u8>,
    /// Seconds since 2001-01-01T00:00:00Z; `None` when never delivered.
    pub delivered_date: Option<f64>,
    pub presented: Option<i64>,
}

impl Record {
    /// The 16-byte `uuid` column as a [`Uuid`].
    pub fn uuid(&self) -> Result<Uuid, DecodeError> {
        Ok(Uuid::from_slice(&self.uuid)?)
    }

    /// Decode the binary property list stored in `data`.
    pub fn payload(&self) -> Result<Payload, DecodeError> {
        Ok(plist::from_reader(Cursor::new(self.data.as_slice()))?)
    }

    /// Delivery time, if the record was delivered.
    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_date.and_then(epoch::to_datetime)
    }

    /// True when the decoded title, subtitle or body matches `pattern`.
    ///
    /// Records whose payload cannot be decoded never match.
    pub fn content_matches(&self, pattern: &Regex) -> bool {
        match self.payload() {
            Ok(payload) => payload.content_matches(pattern),
            Err(e) => {
                log::debug!("rec_id {}: skipping undecodable payload: {e}", self.rec_id);
                false
            }
        }
    }
}

/// The subset of a record payload this tool displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Bundle identifier of the sending application
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req: Option<PayloadRequest>,
}

/// The `req` dictionary of a payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadRequest {
    /// Title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titl: Option<String>,

    /// Subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Payload {
    pub fn title(&self) -> Option<&str> {
        self.req.as_ref()?.titl.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.req.as_ref()?.subt.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.req.as_ref()?.body.as_deref()
    }

    pub fn content_matches(&self, pattern: &Regex) -> bool {
        [self.title(), self.subtitle(), self.body()]
            .into_iter()
            .flatten()
            .any(|text| pattern.is_match(text))
    }
}
