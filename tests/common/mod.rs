#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex, time::Duration};

use reelcards::{
    error::FetchError,
    services::{LoadOrchestrator, ResourceFetcher},
};
use serde_json::Value;
use tokio::sync::oneshot;

/// Serves canned bodies; unknown paths fail like a dropped connection
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Value>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    /// Holds the response for `path` until the returned sender fires
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(path.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ResourceFetcher for StaticFetcher {
    async fn fetch_resource(&self, path: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(path.to_string());
        let gate = self.gates.lock().unwrap().remove(path);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.responses
            .get(path)
            .cloned()
            .ok_or(FetchError::Timeout)
    }
}

/// Polls until both containers reach a terminal state
pub async fn wait_until_settled(orchestrator: &LoadOrchestrator) {
    for _ in 0..200 {
        let snapshot = orchestrator.snapshot();
        if snapshot.ratings.state.is_terminal() && snapshot.recommendations.state.is_terminal() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("containers never settled");
}
