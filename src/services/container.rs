use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle state of one output region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerState {
    Idle,
    Loading,
    SuccessWithData,
    SuccessEmpty,
    Error,
}

impl ContainerState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ContainerState::SuccessWithData | ContainerState::SuccessEmpty | ContainerState::Error
        )
    }
}

/// Observable content of a container at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSnapshot {
    pub state: ContainerState,
    pub markup: String,
    /// Load generation that produced the current content (0 before any load)
    pub generation: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Anything the renderer can write markup into
pub trait RenderTarget {
    /// Replaces the whole content. Returns `false` if the write was refused.
    fn replace(&self, markup: String, state: ContainerState) -> bool;
}

/// Shared handle to one output region of the page
#[derive(Debug, Clone)]
pub struct Container {
    id: &'static str,
    inner: Arc<Mutex<ContainerSnapshot>>,
}

impl Container {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            inner: Arc::new(Mutex::new(ContainerSnapshot {
                state: ContainerState::Idle,
                markup: String::new(),
                generation: 0,
                updated_at: None,
            })),
        }
    }

    /// DOM id of the region on the page
    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn snapshot(&self) -> ContainerSnapshot {
        self.lock().clone()
    }

    /// Writes `markup` tagged with `generation`, but only if `is_current` still
    /// holds while the container is locked.
    pub fn replace_if(
        &self,
        markup: String,
        state: ContainerState,
        generation: u64,
        is_current: impl FnOnce() -> bool,
    ) -> bool {
        let mut inner = self.lock();
        if generation < inner.generation || !is_current() {
            return false;
        }

        inner.markup = markup;
        inner.state = state;
        inner.generation = generation;
        inner.updated_at = Some(Utc::now());
        true
    }

    fn lock(&self) -> MutexGuard<'_, ContainerSnapshot> {
        // Writers never leave the snapshot half-updated, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderTarget for Container {
    fn replace(&self, markup: String, state: ContainerState) -> bool {
        let generation = self.lock().generation;
        self.replace_if(markup, state, generation, || true)
    }
}
