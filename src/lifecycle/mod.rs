//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight → Exit
//!     Drain deadline exceeded → Force close, surface both errors
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - One supervising wait: resumes on a listener fault or a shutdown request,
//!   never both
//! - Shutdown has a deadline: forced close after the grace period

pub mod shutdown;
pub mod signals;

pub use shutdown::{run_with_grace, ServeError, Shutdown};
