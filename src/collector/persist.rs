//! JSON output of the collected records

use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::collector::error::CollectError;
use crate::collector::record::ReleaseRecord;

const INDENT: &[u8] = b"    ";

/// Renders records as a 4-space indented JSON array with sorted keys
pub fn to_json(records: &[ReleaseRecord]) -> Result<Vec<u8>, CollectError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(buf)
}

/// Writes records to `path`, replacing any existing file
pub fn persist(records: &[ReleaseRecord], path: &Path) -> Result<(), CollectError> {
    let json = to_json(records)?;
    std::fs::write(path, json)?;

    info!("Wrote {} releases to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::date::parse_release_date;
    use crate::collector::record::{ListingRow, VersionLink};
    use tempfile::TempDir;

    fn record(version: &str, path: &str, links: &[&str]) -> ReleaseRecord {
        ReleaseRecord::from_row(
            "https://www.python.org",
            ListingRow {
                release_date: parse_release_date("June 6, 2023").unwrap(),
                link: VersionLink::new(version, path),
            },
        )
        .with_download_urls(links.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn to_json_uses_four_space_indent_and_sorted_keys() {
        let json = to_json(&[record(
            "3.11.4",
            "/downloads/release/python-3114/",
            &["https://www.python.org/ftp/python/3.11.4/Python-3.11.4.tgz"],
        )])
        .unwrap();

        let expected = r#"[
    {
        "download_url": [
            "https://www.python.org/ftp/python/3.11.4/Python-3.11.4.tgz"
        ],
        "release_date": "2023-06-06 00:00:00",
        "release_version": "3.11.4",
        "url": "https://www.python.org/downloads/release/python-3114/"
    }
]"#;
        assert_eq!(json, expected.as_bytes());
    }

    #[test]
    fn to_json_writes_empty_array_for_no_records() {
        assert_eq!(to_json(&[]).unwrap(), b"[]");
    }

    #[test]
    fn persist_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.json");
        std::fs::write(&path, "previous output, longer than an empty array").unwrap();

        persist(&[], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn persist_round_trips_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.json");
        let records = vec![
            record("3.11.4", "/downloads/release/python-3114/", &["a.tgz", "b.exe"]),
            record("3.11.3", "/downloads/release/python-3113/", &[]),
        ];

        persist(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Vec<ReleaseRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn persist_fails_for_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("results.json");

        let result = persist(&[], &path);

        assert!(matches!(result, Err(CollectError::Io(_))));
    }
}
