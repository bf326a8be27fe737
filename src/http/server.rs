//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, limits, request ID, metrics)
//! - Run the server under the lifecycle supervisor

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::DirectoryConfig;
use crate::http::handlers;
use crate::http::request::MakeDirectoryRequestId;
use crate::lifecycle::{run_with_grace, ServeError};
use crate::observability::metrics;
use crate::store::UserStore;

/// Application state injected into handlers.
///
/// The store is constructed once here and shared; handlers never reach for
/// ambient state, which keeps them testable against a fresh store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

/// HTTP server for the user directory.
pub struct HttpServer {
    router: Router,
    config: DirectoryConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DirectoryConfig) -> Self {
        let state = AppState {
            store: Arc::new(UserStore::new()),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &DirectoryConfig, state: AppState) -> Router {
        Router::new()
            .route("/users", get(handlers::list_users))
            .route("/user", post(handlers::create_user))
            .route(
                "/user/{id}",
                get(handlers::get_user)
                    .put(handlers::update_user)
                    .delete(handlers::delete_user),
            )
            // route_layer so MatchedPath is populated when the recorder runs
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeDirectoryRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener until a
    /// shutdown request arrives, then drain within the configured grace period.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServeError> {
        let addr = listener.local_addr().map_err(ServeError::Listener)?;
        tracing::info!(address = %addr, "HTTP server starting");

        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);
        run_with_grace(listener, self.router, grace, shutdown).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }
}

/// Record method/route/status and latency for every routed request.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    metrics::record_request(&method, &route, response.status().as_u16(), start);
    response
}
