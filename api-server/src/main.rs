use anyhow::Context;
use style_profiler_api_server::{build_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env().context("invalid server configuration")?;

    // Optional JSON log files next to stdout output
    let (file_layer, _log_guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "api-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,style_profiler_api_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    if config.api_key.is_none() {
        tracing::warn!("GOOGLE_GENERATIVE_AI_API_KEY is not set; analysis requests will fail");
    }

    let state = AppState::from_config(&config).context("failed to create Gemini client")?;
    let app = build_router(state);

    tracing::info!(model = %config.model, "Starting API server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
