use serde::Deserialize;

/// Raw predicted score row from `/recs_debug/{uid}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DebugScore {
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    #[serde(default)]
    pub score: Option<f64>,
}
