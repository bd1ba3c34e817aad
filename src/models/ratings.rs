use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::FetchError;

/// One historic rating as returned by `/user/{uid}`.
///
/// Fields of an unexpected JSON type are read as missing rather than failing
/// the record; numeric titles and numeric-string ratings are kept.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RatingRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub fetched_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster_url: Option<String>,
    /// `None` when the backend emitted NaN
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
}

impl RatingRecord {
    /// Title usable for display; empty titles count as missing
    pub fn display_title(&self) -> Option<&str> {
        self.fetched_title.as_deref().filter(|t| !t.is_empty())
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingsResponse {
    pub count: Option<i64>,
    pub ratings: Vec<RatingRecord>,
}

/// Envelope as sent; records are decoded one by one afterwards
#[derive(Deserialize)]
struct RawRatingsResponse {
    #[serde(default)]
    count: Option<i64>,
    #[serde(default)]
    ratings: Option<Vec<Value>>,
}

impl RatingsResponse {
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        let raw: RawRatingsResponse = serde_json::from_value(value)
            .map_err(|e| FetchError::Malformed(format!("ratings response: {}", e)))?;

        // A zero count needs no record list at all
        let items = match raw.ratings {
            Some(items) => items,
            None if raw.count == Some(0) => Vec::new(),
            None => {
                return Err(FetchError::Malformed(
                    "ratings response: missing ratings list".to_string(),
                ))
            }
        };

        let ratings = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<RatingRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable rating entry");
                    None
                }
            })
            .collect();

        Ok(Self {
            count: raw.count,
            ratings,
        })
    }

    /// The backend reports users without ratings with an explicit zero count
    pub fn has_no_ratings(&self) -> bool {
        self.count == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ratings_response_deserialization() {
        let value = json!({
            "count": 2,
            "ratings": [
                {"movieId": 1, "fetched_title": "Heat", "poster_url": "p1", "rating": 4.5},
                {"movieId": 2, "fetched_title": null, "poster_url": null, "rating": null}
            ]
        });

        let response = RatingsResponse::from_value(value).unwrap();
        assert_eq!(response.count, Some(2));
        assert_eq!(response.ratings[0].display_title(), Some("Heat"));
        assert_eq!(response.ratings[0].rating, Some(4.5));
        assert_eq!(response.ratings[1].display_title(), None);
        assert_eq!(response.ratings[1].poster_url, None);
        assert!(!response.has_no_ratings());
    }

    #[test]
    fn test_zero_count_is_no_ratings() {
        let response = RatingsResponse::from_value(json!({"count": 0, "ratings": []})).unwrap();
        assert!(response.has_no_ratings());
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = RatingsResponse::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_empty_title_is_not_displayable() {
        let record = RatingRecord {
            fetched_title: Some(String::new()),
            poster_url: Some("p".to_string()),
            rating: Some(3.0),
        };
        assert_eq!(record.display_title(), None);
    }

    #[test]
    fn test_zero_count_without_ratings_list() {
        for value in [json!({"count": 0}), json!({"count": 0, "ratings": null})] {
            let response = RatingsResponse::from_value(value).unwrap();
            assert!(response.has_no_ratings());
            assert!(response.ratings.is_empty());
        }
    }

    #[test]
    fn test_missing_list_with_positive_count_is_malformed() {
        let err = RatingsResponse::from_value(json!({"count": 3})).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_off_type_fields_do_not_sink_the_response() {
        let response = RatingsResponse::from_value(json!({
            "count": 4,
            "ratings": [
                {"fetched_title": "A", "poster_url": "pA", "rating": 4},
                {"fetched_title": "B", "poster_url": "pB", "rating": "3.5"},
                {"fetched_title": 1984, "poster_url": "pC", "rating": true},
                "not a record"
            ]
        }))
        .unwrap();

        assert_eq!(response.ratings.len(), 3);
        assert_eq!(response.ratings[0].rating, Some(4.0));
        assert_eq!(response.ratings[1].rating, Some(3.5));
        assert_eq!(response.ratings[2].display_title(), Some("1984"));
        assert_eq!(response.ratings[2].rating, None);
    }
}
