use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::render::TemplateStore;
use crate::settings::Settings;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup; request handling
/// writes nothing shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub settings: Arc<Settings>,
    pub templates: Arc<TemplateStore>,
    /// Pluggable generation backend. Demo mode swaps in `NoopGenerator`.
    pub generator: Arc<dyn TextGenerator>,
}
