use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;

use crate::{error::AppResult, services::PageSnapshot};

use super::{page, AppState};

#[derive(Debug, Deserialize)]
pub struct LoadRequest {
    /// Raw text of the identifier input; validated by the orchestrator
    #[serde(default)]
    pub uid: String,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The page with both containers as currently rendered
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_page(&state.orchestrator.snapshot()))
}

/// Load trigger behind the page's button
pub async fn load_user(
    State(state): State<AppState>,
    Form(request): Form<LoadRequest>,
) -> AppResult<Redirect> {
    let handle = state.orchestrator.load(&request.uid)?;
    tracing::debug!(generation = handle.generation, user_id = %handle.user_id, "Load triggered");
    Ok(Redirect::to("/"))
}

/// Both containers as JSON
pub async fn get_containers(State(state): State<AppState>) -> Json<PageSnapshot> {
    Json(state.orchestrator.snapshot())
}
