use std::sync::Arc;

use bookshelf::app;
use bookshelf::config::{Cli, Config, default_config_dir, default_config_path};
use bookshelf::db::Database;
use bookshelf::handler::AppState;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // With --config, data (the database) lives next to the config file.
    // Otherwise both live in ~/.bookshelf/
    let explicit_config = args.config_path.is_some();
    let (config_path, data_dir) = match args.config_path {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            let dir = path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            (path, dir)
        }
        None => (default_config_path(), default_config_dir()),
    };

    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().json().with_env_filter(filter).init();
    tracing::info!("bookshelf.svc starting");

    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(error = %e, path = ?data_dir, "failed to create data directory");
        std::process::exit(1);
    }

    let cfg = if explicit_config || config_path.exists() {
        Config::new(&config_path.to_string_lossy()).unwrap_or_else(|e| {
            tracing::error!(error = %e, path = ?config_path, "failed to load config file");
            std::process::exit(1);
        })
    } else {
        tracing::info!(path = ?config_path, "no config file found, using defaults");
        Config::default()
    };

    let db = Database::new(&cfg, &data_dir).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup database");
        std::process::exit(1);
    });
    if let Err(e) = db.migrate().await {
        tracing::error!(error = %e, "failed to apply migrations");
        std::process::exit(1);
    }

    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let cancellation_token = CancellationToken::new();
    let router = app(AppState { db: Arc::new(db) });

    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        tracing::info!("ctrl+c signal received, preparing to shutdown");
        shutdown_token.cancel();
    });

    tracing::info!("bookshelf.svc running on {}", &address);
    let result = axum::serve(listener, router)
        .with_graceful_shutdown(async move { cancellation_token.cancelled().await })
        .await;

    if let Err(err) = result {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }

    tracing::info!("bookshelf.svc going off, graceful shutdown complete");
}
