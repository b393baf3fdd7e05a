use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_analyzer::config::Config;
use resume_analyzer::llm_client::{GeminiClient, TextGenerator};
use resume_analyzer::routes::build_router;
use resume_analyzer::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_analyzer={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    let generator: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
        Some(api_key) => {
            let gemini = GeminiClient::new(
                api_key.clone(),
                config.gemini_model.clone(),
                config.gemini_api_base.clone(),
                config.upstream_timeout,
            )?;
            info!(
                "Gemini client initialized (model: {}, timeout: {:?})",
                gemini.model(),
                config.upstream_timeout
            );
            Some(Arc::new(gemini) as Arc<dyn TextGenerator>)
        }
        None => {
            warn!("GEMINI_API_KEY is not set; /api/analyze will answer with a configuration error");
            None
        }
    };

    let app = build_router(AppState { generator })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
