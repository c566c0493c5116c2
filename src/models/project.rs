//! Exported project shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::codec::StringInt;

/// An exported project reachable through its share URL id.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedProject {
    pub url_id: i64,
    pub user_id: i64,
    /// Alias of the exporting user.
    pub alias: String,
    pub app_name: String,
    #[serde(rename = "pkg_name")]
    pub package_name: String,

    /// Epoch milliseconds, string-encoded on the wire.
    #[serde_as(as = "StringInt")]
    #[serde(rename = "reg_dt")]
    pub register_date: i64,

    /// Epoch milliseconds, string-encoded on the wire.
    #[serde_as(as = "StringInt")]
    #[serde(rename = "expire_dt")]
    pub expire_date: i64,
}

impl ExportedProject {
    /// When the export was created.
    pub fn registered_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.register_date)
    }

    /// When the export link expires.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expire_date)
    }

    /// Whether the export link has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| expires <= now)
    }
}

/// Body addressing an export by its URL id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlIdRequest {
    pub url_id: i64,
}

/// Body for downloading an exported project's file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFileRequest {
    pub file_name: String,
    pub user_id: i64,
    pub url_id: i64,
}
