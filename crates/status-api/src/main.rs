//! Status API server entry point.

use status_api::config::Config;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    let listener = match status_api::bind(&config).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            return std::process::ExitCode::FAILURE;
        }
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!(listen_addr = %addr, "starting status server"),
        Err(_) => tracing::info!(listen_addr = %config.addr(), "starting status server"),
    }

    if let Err(err) = status_api::serve(listener, shutdown_signal()).await {
        tracing::error!(error = %err, "server stopped");
        return std::process::ExitCode::FAILURE;
    }

    tracing::info!("server shut down gracefully");
    std::process::ExitCode::SUCCESS
}
