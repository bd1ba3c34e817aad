use serde::Deserialize;
use serde_json::Value;

/// One recommended movie as returned by `/recs/{uid}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecommendationRecord {
    #[serde(default)]
    pub fetched_title: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Recommendations payload; anything but a JSON array is `Malformed`
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationsResponse {
    Items(Vec<RecommendationRecord>),
    Malformed,
}

impl RecommendationsResponse {
    pub fn from_value(value: Value) -> Self {
        let Value::Array(items) = value else {
            return RecommendationsResponse::Malformed;
        };

        let records = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable recommendation entry");
                    None
                }
            })
            .collect();

        RecommendationsResponse::Items(records)
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        match self {
            RecommendationsResponse::Items(records) => records,
            RecommendationsResponse::Malformed => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}
