use std::sync::Arc;

use crate::analysis::pdf::ResumeTextExtractor;
use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Default: `GeminiClient`.
    pub model: Arc<dyn TextModel>,
    /// Pluggable resume reader. Default: `PdfTextExtractor`.
    pub resume_reader: Arc<dyn ResumeTextExtractor>,
    pub config: Config,
}
