use std::sync::Arc;

use crate::auth::SessionStore;
use crate::extraction::TextExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub sessions: SessionStore,
    /// Pluggable file-to-text collaborator. Default: FixtureExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
