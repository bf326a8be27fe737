//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; request ID flows through all subsystems
//! - Metrics are cheap (atomic increments) and no-ops until a recorder installs
//! - The exporter runs on its own listener, separate from the API

pub mod logging;
pub mod metrics;
