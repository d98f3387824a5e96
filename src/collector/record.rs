//! Release records and their assembly from listing rows

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::collector::date;

/// Version label and page-relative detail path of one listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLink {
    pub version: String,
    pub path: String,
}

impl VersionLink {
    pub fn new(version: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
        }
    }
}

/// One row of the listing page: a release date and the link it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub release_date: NaiveDateTime,
    pub link: VersionLink,
}

/// One discovered release
///
/// Fields are declared in alphabetical order so the serialized keys come out sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    #[serde(rename = "download_url")]
    pub download_urls: Vec<String>,
    #[serde(with = "date::canonical")]
    pub release_date: NaiveDateTime,
    pub release_version: String,
    pub url: String,
}

impl ReleaseRecord {
    /// Builds a record without download links. `url` is `site_origin` followed by
    /// the raw relative path, with no normalization.
    pub fn from_row(site_origin: &str, row: ListingRow) -> Self {
        Self {
            download_urls: Vec::new(),
            release_date: row.release_date,
            release_version: row.link.version,
            url: format!("{}{}", site_origin, row.link.path),
        }
    }

    /// Returns a copy of this record carrying `download_urls`
    pub fn with_download_urls(self, download_urls: Vec<String>) -> Self {
        Self {
            download_urls,
            ..self
        }
    }
}

/// Builds records from rows extracted together, so dates and versions cannot misalign
pub fn assemble_rows(site_origin: &str, rows: Vec<ListingRow>) -> Vec<ReleaseRecord> {
    rows.into_iter()
        .map(|row| ReleaseRecord::from_row(site_origin, row))
        .collect()
}

/// Builds records from independently extracted dates and links, paired by position.
///
/// Pairs up to the shorter sequence; trailing unmatched elements are dropped.
pub fn assemble_records(
    site_origin: &str,
    dates: Vec<NaiveDateTime>,
    links: Vec<VersionLink>,
) -> Vec<ReleaseRecord> {
    let rows = dates
        .into_iter()
        .zip(links)
        .map(|(release_date, link)| ListingRow { release_date, link })
        .collect();
    assemble_rows(site_origin, rows)
}
