use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use speechbridge::{
    create_router, AppState, BackendKind, Config, RecognitionController, RecognizerFactory,
    SessionConfig,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "speechbridge", about = "Speech-recognition session service")]
struct Args {
    /// Config file (without extension)
    #[arg(long, default_value = "config/speechbridge")]
    config: String,

    /// Override the recognizer backend (mock | system)
    #[arg(long)]
    backend: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let cfg = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("no config loaded from {} ({}), using defaults", args.config, e);
            Config::default()
        }
    };

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let backend_kind = match &args.backend {
        Some(kind) => kind.parse::<BackendKind>()?,
        None => cfg.recognition.backend,
    };
    let backend = RecognizerFactory::create(backend_kind)?;

    let session_config = SessionConfig {
        language: cfg.recognition.language.clone(),
        max_results: cfg.recognition.max_results,
        partial_results: cfg.recognition.partial_results,
        recreate_on_start: cfg.recognition.recreate_on_start,
        ..SessionConfig::default()
    };

    let controller = Arc::new(RecognitionController::new(session_config, backend)?);
    info!(
        backend = ?backend_kind,
        language = %controller.language(),
        "recognition session controller ready"
    );

    let state = AppState::new(controller);
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
