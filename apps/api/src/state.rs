use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream text generator. `None` when no Gemini credential is configured;
    /// the analyze handler reports that per request.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
