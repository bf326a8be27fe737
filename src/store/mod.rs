//! In-memory user storage subsystem.
//!
//! # Data Flow
//! ```text
//! Handler request
//!     → users.rs (acquire lock, mutate/read map, release)
//!     → Result<User, StoreError> back to handler
//! ```
//!
//! # Design Decisions
//! - One exclusive lock over the whole map; every operation is serialized
//! - Callers get clones, never references into the map
//! - Store checks id uniqueness only; field validation is the handler's job

pub mod users;

pub use users::{StoreError, User, UserStore};
