use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Generative-text client behind a trait so handlers and the normalization
    /// core are testable without a live upstream. Default: GeminiClient.
    pub llm: Arc<dyn TextGenerator>,
}
