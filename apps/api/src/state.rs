use std::sync::Arc;

use crate::analysis::GapNarrator;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::MatchContext;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The match context is immutable after startup: the corpus and the fitted
/// TF-IDF model are built once in `main` and shared read-only, so concurrent
/// requests need no locking.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    pub matcher: Arc<MatchContext>,
    /// Pluggable narrator so tests can stub the remote narration call.
    pub narrator: Arc<dyn GapNarrator>,
}
