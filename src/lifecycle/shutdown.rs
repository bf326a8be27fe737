//! Shutdown coordination for the directory server.

use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tokio::task::JoinError;

use crate::lifecycle::signals;

/// Fatal serve-loop outcomes. Nothing here is retried; all variants are
/// reported to the process exit path.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listener failed outside of a shutdown request.
    #[error("listener error: {0}")]
    Listener(#[source] std::io::Error),

    /// The serve task died without producing a result.
    #[error("server task failed: {0}")]
    Panicked(#[source] JoinError),

    /// In-flight requests did not finish inside the grace period and the
    /// server was forcibly closed. Carries the forced-close error, if any,
    /// alongside the exceeded deadline.
    #[error("graceful shutdown timed out after {grace:?}; server force-closed")]
    ShutdownTimeout {
        grace: Duration,
        #[source]
        close_error: Option<JoinError>,
    },
}

/// Coordinator for graceful shutdown.
///
/// Wraps a broadcast channel: the signal watcher (or a test) triggers it once,
/// and both the supervisor and the accept loop's drain future observe it.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Spawn a watcher that triggers this coordinator on SIGINT/SIGTERM.
    pub fn trigger_on_termination(&self) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            signals::shutdown_signal().await;
            let _ = tx.send(());
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Serve `app` on `listener` until shutdown is requested, then drain in-flight
/// requests bounded by `grace`.
///
/// The accept loop runs as its own task; this function is the supervisor. It
/// suspends exactly once, resuming on whichever comes first:
///
/// - the serve task exits on its own → clean exit or [`ServeError::Listener`];
/// - a shutdown request arrives (a dropped coordinator counts as one) → the
///   listener stops accepting and in-flight requests get `grace` to finish.
///   On time: clean stop. Deadline exceeded: the task is aborted and
///   [`ServeError::ShutdownTimeout`] surfaces the deadline together with any
///   abnormal close error.
pub async fn run_with_grace(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), ServeError> {
    let mut drain = shutdown.resubscribe();
    let mut serve_task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = drain.recv().await;
            })
            .await
    });

    tokio::select! {
        result = &mut serve_task => finish(result),
        _ = shutdown.recv() => {
            tracing::info!(grace_secs = grace.as_secs(), "Draining in-flight requests");
            match tokio::time::timeout(grace, &mut serve_task).await {
                Ok(result) => {
                    let outcome = finish(result);
                    if outcome.is_ok() {
                        tracing::info!("Server stopped cleanly");
                    }
                    outcome
                }
                Err(_) => {
                    tracing::error!(grace_secs = grace.as_secs(), "Drain deadline exceeded, forcing close");
                    serve_task.abort();
                    let close_error = match serve_task.await {
                        Err(e) if !e.is_cancelled() => Some(e),
                        _ => None,
                    };
                    Err(ServeError::ShutdownTimeout { grace, close_error })
                }
            }
        }
    }
}

fn finish(result: Result<std::io::Result<()>, JoinError>) -> Result<(), ServeError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ServeError::Listener(e)),
        Err(e) => Err(ServeError::Panicked(e)),
    }
}
