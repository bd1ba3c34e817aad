use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reelcards::{
    api::{create_router, AppState},
    config::Config,
    models::UserId,
    services::{diagnostics, HttpFetcher, ResourceFetcher},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelcards=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let fetcher: Arc<dyn ResourceFetcher> =
        Arc::new(HttpFetcher::new(&config.backend_url, config.request_timeout())?);
    let state = AppState::new(fetcher.clone());

    // Page ready: show the default user straight away
    state.orchestrator.load(&config.default_user_id.to_string())?;

    let debug_users = config
        .debug_user_ids
        .iter()
        .filter_map(|id| UserId::new(*id).ok())
        .collect();
    diagnostics::spawn_score_tables(fetcher, debug_users);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        backend = %config.backend_url,
        "Page server running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
