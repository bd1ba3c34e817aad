//! Coordinates the ratings and recommendations pipelines for one page.
//!
//! Each trigger gets a generation token. Both containers are written only while
//! their token is still the newest, so a slow response from a superseded load is
//! dropped instead of overwriting what a newer load rendered.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::{
    error::{AppError, AppResult, ValidationError},
    models::{RatingsResponse, RecommendationsResponse, UserId},
    services::{
        container::{Container, ContainerSnapshot, ContainerState, RenderTarget},
        fetcher::ResourceFetcher,
        mapper, renderer,
    },
};

pub const RATINGS_CONTAINER_ID: &str = "ratingsContainer";
pub const RECS_CONTAINER_ID: &str = "recsContainer";

pub const LOADING_RATINGS: &str = "Loading ratings...";
pub const NO_HISTORIC_RATINGS: &str = "No historic ratings for this user.";
pub const NO_VALID_RATED_MOVIES: &str = "No valid rated movies to display.";
pub const RATINGS_ERROR: &str = "Error loading ratings.";
pub const LOADING_RECOMMENDATIONS: &str = "Loading recommendations...";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";
pub const RECOMMENDATIONS_ERROR: &str = "Error loading recommendations.";

/// What one pipeline did with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineOutcome {
    Rendered(ContainerState),
    /// A newer load started before this result arrived
    Superseded,
}

impl From<Option<ContainerState>> for PipelineOutcome {
    fn from(written: Option<ContainerState>) -> Self {
        written.map_or(PipelineOutcome::Superseded, PipelineOutcome::Rendered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub ratings: PipelineOutcome,
    pub recommendations: PipelineOutcome,
}

/// An in-flight load started by [`LoadOrchestrator::load`]
#[derive(Debug)]
pub struct LoadHandle {
    pub generation: u64,
    pub user_id: UserId,
    task: JoinHandle<LoadOutcome>,
}

impl LoadHandle {
    /// Waits for both pipelines to finish
    pub async fn wait(self) -> AppResult<LoadOutcome> {
        self.task.await.map_err(|e| {
            tracing::error!(generation = self.generation, error = %e, "Load task failed");
            AppError::Internal(e.to_string())
        })
    }
}

/// Both containers plus the load that last touched them
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub generation: u64,
    pub user_id: Option<UserId>,
    pub ratings: ContainerSnapshot,
    pub recommendations: ContainerSnapshot,
}

#[derive(Debug, Default)]
struct GenerationCounter(AtomicU64);

impl GenerationCounter {
    fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    fn is_current(&self, token: u64) -> bool {
        self.current() == token
    }
}

/// Container writes that only land while `token` is the newest generation
struct GenerationGuard<'a> {
    container: &'a Container,
    generations: &'a GenerationCounter,
    token: u64,
}

impl RenderTarget for GenerationGuard<'_> {
    fn replace(&self, markup: String, state: ContainerState) -> bool {
        self.container
            .replace_if(markup, state, self.token, || self.generations.is_current(self.token))
    }
}

/// Owns the page's two output regions and drives loads into them
#[derive(Clone)]
pub struct LoadOrchestrator {
    fetcher: Arc<dyn ResourceFetcher>,
    ratings: Container,
    recommendations: Container,
    generations: Arc<GenerationCounter>,
    last_user: Arc<Mutex<Option<UserId>>>,
}

impl LoadOrchestrator {
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self {
            fetcher,
            ratings: Container::new(RATINGS_CONTAINER_ID),
            recommendations: Container::new(RECS_CONTAINER_ID),
            generations: Arc::new(GenerationCounter::default()),
            last_user: Arc::new(Mutex::new(None)),
        }
    }

    /// Validates `input` and starts both pipelines for it.
    ///
    /// Invalid input leaves both containers untouched and issues no request.
    /// Must be called from within a tokio runtime.
    pub fn load(&self, input: &str) -> Result<LoadHandle, ValidationError> {
        let user_id = input.parse::<UserId>().map_err(|e| {
            tracing::warn!(input = %input, error = %e, "Rejected user identifier");
            e
        })?;

        let generation = self.generations.advance();
        *self.last_user.lock().unwrap_or_else(PoisonError::into_inner) = Some(user_id);

        renderer::render_loading(&self.guard(&self.ratings, generation), LOADING_RATINGS);
        renderer::render_loading(
            &self.guard(&self.recommendations, generation),
            LOADING_RECOMMENDATIONS,
        );

        tracing::info!(user_id = %user_id, generation, "Loading user");

        let orchestrator = self.clone();
        let task = tokio::spawn(async move { orchestrator.run(user_id, generation).await });

        Ok(LoadHandle {
            generation,
            user_id,
            task,
        })
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            generation: self.generations.current(),
            user_id: *self.last_user.lock().unwrap_or_else(PoisonError::into_inner),
            ratings: self.ratings.snapshot(),
            recommendations: self.recommendations.snapshot(),
        }
    }

    pub fn ratings_container(&self) -> &Container {
        &self.ratings
    }

    pub fn recommendations_container(&self) -> &Container {
        &self.recommendations
    }

    async fn run(&self, user_id: UserId, generation: u64) -> LoadOutcome {
        let (ratings, recommendations) = tokio::join!(
            self.load_ratings(user_id, generation),
            self.load_recommendations(user_id, generation)
        );

        tracing::debug!(
            user_id = %user_id,
            generation,
            ?ratings,
            ?recommendations,
            "Load finished"
        );

        LoadOutcome {
            ratings,
            recommendations,
        }
    }

    async fn load_ratings(&self, user_id: UserId, generation: u64) -> PipelineOutcome {
        let target = self.guard(&self.ratings, generation);
        let result = self
            .fetcher
            .fetch_resource(&format!("/user/{}", user_id))
            .await
            .and_then(RatingsResponse::from_value);

        let written = match result {
            Err(e) => {
                tracing::error!(user_id = %user_id, generation, error = %e, "Error fetching user ratings");
                renderer::render_error(&target, RATINGS_ERROR)
            }
            Ok(response) if response.has_no_ratings() => {
                renderer::render(&target, &[], NO_HISTORIC_RATINGS)
            }
            Ok(response) => {
                let cards = mapper::map_ratings(&response);
                renderer::render(&target, &cards, NO_VALID_RATED_MOVIES)
            }
        };

        self.outcome(RATINGS_CONTAINER_ID, generation, written)
    }

    async fn load_recommendations(&self, user_id: UserId, generation: u64) -> PipelineOutcome {
        let target = self.guard(&self.recommendations, generation);
        let result = self
            .fetcher
            .fetch_resource(&format!("/recs/{}", user_id))
            .await;

        let written = match result {
            Err(e) => {
                tracing::error!(user_id = %user_id, generation, error = %e, "Error fetching recommendations");
                renderer::render_error(&target, RECOMMENDATIONS_ERROR)
            }
            Ok(value) => {
                let response = RecommendationsResponse::from_value(value);
                let cards = mapper::map_recommendations(&response);
                renderer::render(&target, &cards, NO_RECOMMENDATIONS)
            }
        };

        self.outcome(RECS_CONTAINER_ID, generation, written)
    }

    fn guard<'a>(&'a self, container: &'a Container, token: u64) -> GenerationGuard<'a> {
        GenerationGuard {
            container,
            generations: &self.generations,
            token,
        }
    }

    fn outcome(
        &self,
        container: &'static str,
        generation: u64,
        written: Option<ContainerState>,
    ) -> PipelineOutcome {
        if written.is_none() {
            tracing::debug!(
                container,
                generation,
                current = self.generations.current(),
                "Discarding superseded result"
            );
        }
        PipelineOutcome::from(written)
    }
}
