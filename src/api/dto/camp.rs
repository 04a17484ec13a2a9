//! Camp transfer models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::talk::TalkModel;

fn default_length() -> i32 {
    1
}

/// Wire representation of a camp.
///
/// The venue fields of the camp's location are flattened onto the model;
/// see [`crate::api::mapping`] for the translation in both directions.
/// `Talks` is ignored on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct CampModel {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Moniker is required"))]
    pub moniker: String,

    pub event_date: NaiveDate,

    #[serde(default = "default_length")]
    #[validate(range(min = 1, max = 100))]
    pub length: i32,

    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    #[serde(default)]
    pub city_town: Option<String>,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub talks: Vec<TalkModel>,
}

/// Version 2 list response: the camps plus their count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CampListEnvelope {
    pub count: usize,
    pub results: Vec<CampModel>,
}

impl From<Vec<CampModel>> for CampListEnvelope {
    fn from(results: Vec<CampModel>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}
