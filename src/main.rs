mod settings;
mod error;
mod handlers;
mod llm;
mod prompt;
mod routes;
mod state;
mod templates;
mod translations;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_backend=debug,tower_http=debug")),
        )
        .init();

    let settings = Settings::load()?;
    info!(
        "Loaded configuration: model={}, knowledge_file={}, default_lang={}",
        settings.gemini_model,
        settings.knowledge_file.display(),
        settings.default_lang
    );

    let addr = settings.bind_addr();
    let app_state = AppState::new(settings)?;
    let app = routes::create_app(app_state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
