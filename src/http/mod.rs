//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → request.rs (request ID generation/propagation)
//!     → handlers.rs (parse, validate, call store)
//!     → error.rs (store outcome → HTTP outcome)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{MakeDirectoryRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
