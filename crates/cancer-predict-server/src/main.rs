//! Cancer Predict - HTTP prediction service.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use cancer_predict_adapters::load_model;
use cancer_predict_core::inference::get_device;
use cancer_predict_server::cli::{Cli, Settings};
use cancer_predict_server::config::AppConfig;
use cancer_predict_server::{router, AppState};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v flags when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let settings = cli.with_config(&AppConfig::load());

    match serve(settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(settings: Settings) -> Result<()> {
    info!("Cancer Predict v{}", env!("CARGO_PKG_VERSION"));

    // The model is loaded exactly once; without it there is no service.
    let device = get_device();
    let classifier = load_model(&settings.model_path, &device)
        .with_context(|| format!("Failed to load model from {}", settings.model_path.display()))?;

    let state = Arc::new(AppState::new(classifier, device));
    let app = router(state);

    let addr = settings.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server started at: http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
