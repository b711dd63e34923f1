//! Beatmapset search query parameters.
//!
//! The search page works in UI status labels and page numbers; the API wants
//! numeric rank statuses and a `limit`/`offset` window.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Beatmap rank status as the API numbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum RankStatus {
    Graveyard = -2,
    Wip = -1,
    Pending = 0,
    Ranked = 1,
    Approved = 2,
    Qualified = 3,
    Loved = 4,
}

impl RankStatus {
    pub fn api_value(self) -> i8 {
        self as i8
    }
}

impl FromStr for RankStatus {
    type Err = ();

    /// Parse a UI label. Labels are matched exactly.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Graveyard" => Ok(RankStatus::Graveyard),
            "Wip" => Ok(RankStatus::Wip),
            "Pending" => Ok(RankStatus::Pending),
            "Ranked" => Ok(RankStatus::Ranked),
            "Approved" => Ok(RankStatus::Approved),
            "Qualified" => Ok(RankStatus::Qualified),
            "Loved" => Ok(RankStatus::Loved),
            _ => Err(()),
        }
    }
}

/// Map UI status labels to API status numbers.
///
/// Unknown labels are dropped and duplicates removed, keeping first-seen order.
pub fn map_ui_statuses<S: AsRef<str>>(labels: &[S]) -> Vec<i8> {
    let mut out: Vec<i8> = Vec::with_capacity(labels.len());
    for value in labels
        .iter()
        .filter_map(|label| label.as_ref().parse::<RankStatus>().ok())
        .map(RankStatus::api_value)
    {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Inputs of the beatmapset search page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatmapsetSearchParams {
    pub query: Option<String>,
    pub limit: Option<i64>,
    /// 1-based page number; anything below 1 is treated as 1.
    pub page: i64,
    /// UI status labels such as `"Ranked"`.
    pub status: Vec<String>,
    pub mode: Option<String>,
    pub search_by_custom_status: bool,
}

impl BeatmapsetSearchParams {
    fn normalized_page(&self) -> i64 {
        if self.page > 0 {
            self.page
        } else {
            1
        }
    }

    /// Build the ordered query pairs sent to `beatmapset/search`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            let offset = (self.normalized_page() - 1).saturating_mul(limit);
            pairs.push(("limit", limit.to_string()));
            pairs.push(("offset", offset.to_string()));
        }

        if !self.search_by_custom_status {
            if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
                pairs.push(("query", query.to_string()));
            }
            if let Some(mode) = &self.mode {
                pairs.push(("mode", mode.clone()));
            }
        }

        pairs.extend(
            map_ui_statuses(&self.status)
                .into_iter()
                .map(|status| ("status", status.to_string())),
        );

        pairs
    }

    /// The pairs as a percent-encoded query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const LABELS: [&str; 9] = [
        "Graveyard", "Wip", "Pending", "Ranked", "Approved", "Qualified", "Loved", "Nope", "",
    ];

    proptest! {
        /// Mapped statuses are unique and all valid API values.
        #[test]
        fn prop_statuses_unique_and_valid(
            picks in prop::collection::vec(0usize..LABELS.len(), 0..20),
        ) {
            let labels: Vec<&str> = picks.iter().map(|&i| LABELS[i]).collect();
            let mapped = map_ui_statuses(&labels);

            let mut sorted = mapped.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), mapped.len());
            prop_assert!(mapped.iter().all(|s| (-2..=4).contains(s)));
        }

        /// Offset is always (page - 1) * limit for positive inputs.
        #[test]
        fn prop_offset_matches_page(page in 1i64..1000, limit in 1i64..100) {
            let params = BeatmapsetSearchParams { page, limit: Some(limit), ..Default::default() };
            let pairs = params.to_query_pairs();
            prop_assert_eq!(pairs[1].clone(), ("offset", ((page - 1) * limit).to_string()));
        }
    }
}
