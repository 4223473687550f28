use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hits for one calendar day of the requested window.
///
/// `countries` and `browsers` are tracked independently of `total`; their
/// sums are not expected to match it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "title")]
    pub label: String,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub countries: BTreeMap<String, u64>,
    #[serde(default)]
    pub browsers: BTreeMap<String, u64>,
}

/// Hit count for a single page or slug seen in the window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    #[serde(default)]
    pub count: u64,
}

/// Body returned by the status endpoint. Missing fields fall back to their
/// empty values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusResponse {
    pub total: u64,
    pub today: u64,
    pub daily_results: Vec<DailyRecord>,
    pub page_results: Vec<PageRecord>,
    pub is_sponsored: bool,
    pub days: u32,
}
