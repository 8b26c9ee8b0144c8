//! Release dates as they appear in catalog records.
//!
//! Records carry either a calendar date (`2024-06-01`, read as midnight UTC)
//! or a full RFC 3339 timestamp.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

use storefront_core::{CatalogError, CatalogResult};

pub fn parse(raw: &str) -> CatalogResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            CatalogError::validation(format!(
                "release date {raw:?} is neither YYYY-MM-DD nor RFC 3339: {e}"
            ))
        })
}

/// `deserialize_with` target for `Option<DateTime<Utc>>` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse(&s).map_err(serde::de::Error::custom)).transpose()
}
