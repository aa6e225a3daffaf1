//! Process plumbing shared by both binaries
//!
//! Logging setup, binding the listener and running the router until a
//! shutdown signal arrives.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

/// Installs the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise this crate and `tower_http` log at
/// debug level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pocket_services=debug,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Serves `app` on the configured address until SIGINT or SIGTERM
pub async fn serve(app: Router, config: &ServiceConfig, service: &str) -> std::io::Result<()> {
    let app = app.layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(
        service,
        addr = %addr,
        database = %config.database_path.display(),
        "server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(service, "server stopped");
    Ok(())
}

/// Resolves when the process is asked to stop
///
/// In-flight requests finish and their transactions commit or roll back
/// before the server returns.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
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
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
