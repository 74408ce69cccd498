use std::sync::Arc;

use clap::Parser;
use sensitive::cli::{Cli, Command};
use sensitive::config::Settings;
use sensitive::{dict, server, Filter};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (port, dict_path) = match cli.command {
        Command::Config { path } => {
            let settings = Settings::from_file(&path)?;
            (settings.port, settings.path)
        }
        Command::Flag { port, path } => (port, path),
    };

    let filter = Arc::new(Filter::new());
    if let Some(path) = dict_path {
        let phrases = if dict::is_network_path(&path) {
            dict::load_url(&path).await?
        } else {
            dict::load_file(&path)?
        };
        let count = phrases.len();
        filter.load_many(phrases);
        info!(count, "dictionary loaded");
    }

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "server is running");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let serving = tokio::spawn(async move {
        axum::serve(listener, server::app(filter))
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    let _ = shutdown_tx.send(());

    // Mirrors the original service's bounded shutdown window: once a
    // signal is caught, in-flight requests get `SHUTDOWN_GRACE` to finish
    // before this process exits anyway.
    const SHUTDOWN_GRACE: std::time::Duration = std::time::Duration::from_secs(5);
    match tokio::time::timeout(SHUTDOWN_GRACE, serving).await {
        Ok(result) => result??,
        Err(_) => warn!("graceful shutdown grace period elapsed, exiting anyway"),
    }

    info!("server exiting");
    Ok(())
}

/// Waits for SIGINT/SIGTERM (and SIGQUIT on unix), mirroring the original
/// service's signal-driven graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut sigquit = signal(SignalKind::quit()).expect("failed to install SIGQUIT handler");
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigquit.recv() => {},
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    warn!("received shutdown signal");
}
