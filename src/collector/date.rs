//! Release date parsing and its canonical string form

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer, Serializer};

use crate::collector::error::CollectError;

/// Canonical string form of a release date, e.g. `2023-06-06 00:00:00`
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%B %d %Y", "%d %B %Y", "%Y-%m-%d"];

/// Leading month token with an optional abbreviation period ("Oct.", "Sept.")
static MONTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)([a-z]+)\.?(\s)").expect("valid month regex"));

/// Parses listing date text such as `June 6, 2023` or `Sept. 7, 2015`
pub fn parse_release_date(text: &str) -> Result<NaiveDateTime, CollectError> {
    let normalized = normalize(text);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| CollectError::InvalidDate(text.trim().to_string()))
}

pub fn to_canonical(date: &NaiveDateTime) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

fn normalize(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    MONTH_TOKEN
        .replace(&collapsed, |caps: &Captures| {
            let month = &caps[1];
            // chrono only knows the three-letter form
            let month = if month.eq_ignore_ascii_case("sept") {
                "Sep"
            } else {
                month
            };
            format!("{}{}", month, &caps[2])
        })
        .into_owned()
}

/// serde adapter writing dates in [`CANONICAL_FORMAT`]
pub mod canonical {
    use super::*;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_canonical(date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, CANONICAL_FORMAT).map_err(serde::de::Error::custom)
    }
}
