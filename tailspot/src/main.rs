use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tailspot::api::{create_router, AppState};
use tailspot::config::Config;
use tailspot::enrichment::EnrichmentClient;
use tailspot::ocr::OcrProvider;
use tailspot::recognition::PatternCatalog;

#[derive(Parser)]
#[command(name = "tailspot")]
#[command(about = "Aircraft tail registration recognition service")]
struct Args {
    /// Override the directory annotated scan images are written into
    #[arg(long)]
    output_dir: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tailspot=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(dir) = args.output_dir {
        config.output.dir = dir;
    }

    tracing::info!("Compiling registration grammar catalog...");
    let catalog = Arc::new(PatternCatalog::new()?);
    tracing::info!(grammars = catalog.len(), "Pattern catalog ready");

    tracing::info!("Initializing OCR provider...");
    let ocr = OcrProvider::new(&config.ocr);
    if !ocr.is_available() {
        tracing::warn!("OCR unavailable - scan requests will fail until Tesseract is installed");
    }

    let enrichment = EnrichmentClient::new(&config.enrichment);
    if !enrichment.is_available() {
        tracing::warn!(
            "Enrichment disabled - matches will carry 'Unknown' metadata. Set AERODATABOX_API_TOKEN to enable lookups."
        );
    }

    let state = AppState::new(config.clone(), catalog, ocr, enrichment);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Tailspot starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  Scan upload:  POST http://{}/api/v1/scans", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
