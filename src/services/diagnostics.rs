//! Startup logging of raw recommendation scores.
//!
//! Purely diagnostic: failures are logged and never reach the page.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::{
    error::FetchError,
    models::{DebugScore, UserId},
    services::fetcher::ResourceFetcher,
};

/// Fetches `/recs_debug/{uid}` and logs it one row per line
pub async fn log_score_table(
    fetcher: &dyn ResourceFetcher,
    user_id: UserId,
) -> Result<Vec<DebugScore>, FetchError> {
    let value = fetcher
        .fetch_resource(&format!("/recs_debug/{}", user_id))
        .await?;
    let scores: Vec<DebugScore> = serde_json::from_value(value)
        .map_err(|e| FetchError::Malformed(format!("debug scores: {}", e)))?;

    for (rank, row) in scores.iter().enumerate() {
        tracing::debug!(
            user_id = %user_id,
            rank = rank + 1,
            movie_id = row.movie_id,
            score = ?row.score,
            "Recommendation score"
        );
    }

    Ok(scores)
}

/// Logs score tables for `user_ids` in the background
pub fn spawn_score_tables(fetcher: Arc<dyn ResourceFetcher>, user_ids: Vec<UserId>) -> JoinHandle<()> {
    tokio::spawn(async move {
        for user_id in user_ids {
            match log_score_table(fetcher.as_ref(), user_id).await {
                Ok(scores) => {
                    tracing::info!(user_id = %user_id, rows = scores.len(), "Logged recommendation scores")
                }
                Err(e) => {
                    tracing::warn!(user_id = %user_id, error = %e, "Recommendation score table unavailable")
                }
            }
        }
    })
}
