//! Mutex-guarded user map.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::metrics;

/// A stored user record. Also the wire representation for requests and
/// responses (fields `id`, `name`, `email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier. Immutable once assigned.
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An entry with this id is already present.
    #[error("user {0} already exists")]
    AlreadyExists(String),

    /// No entry with this id.
    #[error("user {0} not found")]
    NotFound(String),
}

/// Exclusive-access in-memory mapping from user id to record.
///
/// All operations take the lock for their whole duration, so concurrent
/// callers are strictly serialized and never observe a half-applied write.
/// Reads take the same lock as writes; there is no reader/writer split.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<HashMap<String, User>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    // A poisoned lock means some thread panicked mid-call; no operation here
    // leaves the map half-mutated, so the inner value is still consistent.
    fn guard(&self) -> MutexGuard<'_, HashMap<String, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a new record. Fails if the id is already taken.
    pub fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.guard();
        if users.contains_key(&user.id) {
            return Err(StoreError::AlreadyExists(user.id));
        }
        users.insert(user.id.clone(), user.clone());
        metrics::record_store_size(users.len());
        Ok(user)
    }

    /// Fetch a copy of the record for `id`.
    pub fn get(&self, id: &str) -> Result<User, StoreError> {
        self.guard()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Copies of every stored record, in unspecified order.
    pub fn list(&self) -> Vec<User> {
        self.guard().values().cloned().collect()
    }

    /// Replace name and email of an existing record. The id is never altered
    /// by this operation.
    pub fn update(&self, id: &str, name: String, email: String) -> Result<User, StoreError> {
        let mut users = self.guard();
        let user = users
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        user.name = name;
        user.email = email;
        Ok(user.clone())
    }

    /// Remove the record for `id`.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut users = self.guard();
        if users.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        metrics::record_store_size(users.len());
        Ok(())
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}
