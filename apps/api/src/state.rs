use std::sync::Arc;

use crate::config::Config;
use crate::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordOverlapScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
