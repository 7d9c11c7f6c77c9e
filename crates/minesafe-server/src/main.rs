use clap::Parser;
use minesafe_api::{create_router, AppState};
use minesafe_capture::{CaptureConstraints, CaptureController, StubCameraSource};
use minesafe_notify::{NotifyCenter, WebhookNotifier};
use minesafe_store::{DashboardStore, SeedData};
use std::sync::Arc;
use tracing::info;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    info!("Starting minesafe dashboard server with config: {}", args.config);

    let cfg = config::ServerConfig::load(&args.config)?;

    // 本地采集源（占位实现，生产环境接真实采集设备）
    let source = Arc::new(StubCameraSource::new());
    if cfg.camera.simulate_denial {
        source.set_deny(true);
    }
    let camera = Arc::new(CaptureController::new(
        source,
        CaptureConstraints {
            width: cfg.camera.width,
            height: cfg.camera.height,
        },
    ));

    let store = Arc::new(DashboardStore::new(SeedData::builtin(), camera));

    let notify = Arc::new(NotifyCenter::new(cfg.notify_level()));
    if let Some(url) = &cfg.notify.webhook_url {
        notify
            .register(Box::new(WebhookNotifier::new(url.clone())))
            .await;
    }

    let state = AppState::new(store, notify);
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Dashboard API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
