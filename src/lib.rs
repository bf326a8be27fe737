//! In-Memory User Directory
//!
//! A minimal user directory served over HTTP, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               USER DIRECTORY                 │
//!                    │                                              │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ handlers │──▶│  store   │  │
//!                    │  │ server  │   │          │   │ (mutex)  │  │
//!   Client Response  │  └─────────┘   └──────────┘   └──────────┘  │
//!   ◀────────────────┼───────┘                                     │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │         Cross-Cutting Concerns         │  │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │  │
//!                    │  │  │ config │ │ lifecycle │ │ observa-│  │  │
//!                    │  │  │        │ │ (signals, │ │ bility  │  │  │
//!                    │  │  │        │ │ shutdown) │ │         │  │  │
//!                    │  │  └────────┘ └───────────┘ └─────────┘  │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! All user state lives in [`store::UserStore`], a mutex-guarded map owned by
//! the server process. Shutdown is signal-driven with a bounded drain; see
//! [`lifecycle`].

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::DirectoryConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{StoreError, User, UserStore};
