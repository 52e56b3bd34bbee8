use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_client::{CompletionAgent, Gemini};
use barak_common::Config;
use barak_server::search::NoopSearch;
use barak_server::{routes, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("barak_server=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let ai: Option<Arc<dyn CompletionAgent>> = match &config.gemini_api_key {
        Some(key) => {
            info!(model = %config.gemini_model, "Gemini completion client configured");
            Some(Arc::new(
                Gemini::new(key.as_str(), config.gemini_model.as_str()).with_temperature(0.0),
            ))
        }
        None => {
            warn!("GEMINI_API_KEY not set — starting with criteria extraction disabled");
            None
        }
    };

    let state = Arc::new(AppState {
        ai,
        search: Arc::new(NoopSearch),
    });

    let app = routes::router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Barak backend starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
