//! Shutdown signal handling
//!
//! Once an interrupt or terminate signal arrives the server stops accepting
//! connections and drains in-flight requests.

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
#[error("failed to install {signal} handler")]
pub(crate) struct SignalHandlerError {
    signal: &'static str,
    #[source]
    source: io::Error,
}

impl SignalHandlerError {
    fn new(signal: &'static str, source: io::Error) -> Self {
        Self { signal, source }
    }
}

/// Wait for an interrupt or terminate signal, then stop the server
/// gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), SignalHandlerError> {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .map_err(|source| SignalHandlerError::new("Ctrl+C", source))
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(|source| SignalHandlerError::new("SIGTERM", source))?
            .recv()
            .await;

        Ok(())
    };

    // No SIGTERM elsewhere; only the interrupt arm can complete.
    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), SignalHandlerError>>();

    tokio::select! {
        result = interrupt => {
            result?;
            info!("interrupt received, shutting down");
        }
        result = terminate => {
            result?;
            info!("terminate received, shutting down");
        }
    }

    handle.stop_graceful(None);

    Ok(())
}
