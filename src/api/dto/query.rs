//! Query string parameters for the camps endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// `?includeTalks=true|false` (default: false).
///
/// Uses `serde_with` to parse the flag from its string form.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeTalksParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub include_talks: Option<bool>,
}

impl IncludeTalksParams {
    pub fn include_talks(&self) -> bool {
        self.include_talks.unwrap_or(false)
    }
}

/// `?theDate=...&includeTalks=...` for the date search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(with = "flexible_date")]
    pub the_date: NaiveDate,

    #[serde(flatten)]
    pub include: IncludeTalksParams,
}

/// Accepts a plain date (`2018-10-18`), a local timestamp
/// (`2018-10-18T09:00:00`) or an RFC 3339 timestamp; only the date is kept.
mod flexible_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt.date());
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .map_err(|_| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }
}
