use std::sync::Arc;

use crate::config::Config;
use crate::outreach::writer::OutreachWriter;
use crate::scoring::ScoringEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Validated reference tables plus the six category scorers. Read-only.
    pub engine: Arc<ScoringEngine>,
    /// Pluggable outreach writer. Template by default, LLM when a key is configured.
    pub outreach: Arc<dyn OutreachWriter>,
    pub config: Config,
}
