pub mod container;
pub mod diagnostics;
pub mod fetcher;
pub mod mapper;
pub mod orchestrator;
pub mod renderer;
pub mod sanitizer;

pub use container::{Container, ContainerSnapshot, ContainerState, RenderTarget};
pub use fetcher::{HttpFetcher, ResourceFetcher};
pub use orchestrator::{LoadHandle, LoadOrchestrator, LoadOutcome, PageSnapshot, PipelineOutcome};
