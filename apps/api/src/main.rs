use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hr_docs_api::config::Config;
use hr_docs_api::llm_client::{self, NoopGenerator, OpenAiGenerator, TextGenerator};
use hr_docs_api::render::TemplateStore;
use hr_docs_api::routes::build_router;
use hr_docs_api::settings::Settings;
use hr_docs_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a malformed environment)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HR document service v{}", env!("CARGO_PKG_VERSION"));

    // Static configuration and templates: loaded once, read-only afterwards
    let settings = Arc::new(Settings::load(&config.config_dir)?);
    info!(
        "Configuration loaded for {} from {}",
        settings.company.company.name,
        config.config_dir.display()
    );

    let templates = Arc::new(TemplateStore::load(&config.templates_dir)?);
    info!("Templates loaded from {}", config.templates_dir.display());

    // Generation backend, or demo mode when no credential is configured
    let generator: Arc<dyn TextGenerator> = match &config.openai_api_key {
        Some(key) => {
            info!("Generation backend enabled (model: {})", llm_client::MODEL);
            Arc::new(OpenAiGenerator::new(
                key.clone(),
                config.openai_base_url.clone(),
                settings.prompts.clone(),
                settings.company.company.name.clone(),
            ))
        }
        None => {
            warn!("OPENAI_API_KEY not set; running in demo mode (template rendering only)");
            Arc::new(NoopGenerator)
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        settings,
        templates,
        generator,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
