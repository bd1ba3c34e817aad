use serde::Serialize;

/// Poster the backend substitutes for movies without artwork
pub const PLACEHOLDER_POSTER: &str = "/static/images/placeholder.jpg";

/// Title shown for recommendations the backend returned without one
pub const UNKNOWN_TITLE: &str = "Unknown Movie";

/// Renderable representation of one movie, rated or recommended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieCard {
    pub title: String,
    pub poster_url: String,
    /// Absent for recommendations and for ratings the backend reported as NaN
    pub rating: Option<f64>,
}

impl MovieCard {
    pub fn new(title: impl Into<String>, poster_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            poster_url: poster_url.into(),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }
}
