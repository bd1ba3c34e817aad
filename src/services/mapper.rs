//! Conversion of backend records into [`MovieCard`] view models.

use crate::models::{
    MovieCard, RatingsResponse, RecommendationsResponse, PLACEHOLDER_POSTER, UNKNOWN_TITLE,
};

/// One card per rating record that carries a non-empty title
pub fn map_ratings(response: &RatingsResponse) -> Vec<MovieCard> {
    response
        .ratings
        .iter()
        .filter_map(|record| {
            let title = record.display_title()?;
            let poster = record.poster_url.as_deref().unwrap_or(PLACEHOLDER_POSTER);
            Some(MovieCard::new(title, poster).with_rating(record.rating))
        })
        .collect()
}

/// One unrated card per recommendation; a malformed payload yields no cards
pub fn map_recommendations(response: &RecommendationsResponse) -> Vec<MovieCard> {
    response
        .records()
        .iter()
        .map(|record| {
            MovieCard::new(
                record.fetched_title.as_deref().unwrap_or(UNKNOWN_TITLE),
                record.poster_url.as_deref().unwrap_or(PLACEHOLDER_POSTER),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sanitizer::sanitize_and_parse;

    #[test]
    fn test_untitled_ratings_are_dropped() {
        let value = sanitize_and_parse(
            r#"{"count": 2, "ratings": [
                {"fetched_title": "A", "poster_url": "pA", "rating": NaN},
                {"fetched_title": "", "poster_url": "pB", "rating": 4}
            ]}"#,
        )
        .unwrap();
        let response = RatingsResponse::from_value(value).unwrap();

        let cards = map_ratings(&response);
        assert_eq!(cards, vec![MovieCard::new("A", "pA")]);
        assert_eq!(cards[0].rating, None);
    }

    #[test]
    fn test_ratings_keep_rating_and_fill_poster() {
        let value = serde_json::json!({
            "count": 1,
            "ratings": [{"fetched_title": "Heat", "poster_url": null, "rating": 4.5}]
        });
        let cards = map_ratings(&RatingsResponse::from_value(value).unwrap());
        assert_eq!(cards[0].poster_url, PLACEHOLDER_POSTER);
        assert_eq!(cards[0].rating, Some(4.5));
    }

    #[test]
    fn test_all_untitled_ratings_map_to_nothing() {
        let value = serde_json::json!({
            "count": 1,
            "ratings": [{"fetched_title": null, "poster_url": "p", "rating": 2}]
        });
        assert!(map_ratings(&RatingsResponse::from_value(value).unwrap()).is_empty());
    }

    #[test]
    fn test_recommendations_have_no_rating() {
        let response = RecommendationsResponse::from_value(serde_json::json!([
            {"fetched_title": "X", "poster_url": "pX"}
        ]));
        let cards = map_recommendations(&response);
        assert_eq!(cards, vec![MovieCard::new("X", "pX")]);
    }

    #[test]
    fn test_recommendation_without_title_uses_fallback() {
        let response = RecommendationsResponse::from_value(serde_json::json!([{}]));
        let cards = map_recommendations(&response);
        assert_eq!(cards[0].title, UNKNOWN_TITLE);
        assert_eq!(cards[0].poster_url, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_malformed_recommendations_are_empty() {
        assert!(map_recommendations(&RecommendationsResponse::Malformed).is_empty());
    }
}
