//! Storage seam between the request dispatcher and the backing table.
//!
//! [`TaskStore`] is the five-operation contract the dispatcher is written
//! against: point lookup, full scan, overwrite, partial update, delete by
//! key. Production uses [`dynamodb::DynamoDbStore`]; tests substitute the
//! in-memory implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Task;

pub mod dynamodb;
#[cfg(test)]
pub mod memory;

/// A failure inside the backing store.
///
/// Carries a human-readable message and, where one exists, the underlying
/// error for `source()` chains. Implementations map their own error types
/// into this before surfacing to the dispatcher.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// The operations the dispatcher performs against the task table.
///
/// At most one of these runs per invocation.
#[async_trait]
pub trait TaskStore {
    /// Point lookup by key. `Ok(None)` when the key is absent.
    async fn get(&self, task_id: &str) -> Result<Option<Task>, StoreError>;

    /// Full unordered scan of the table.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Unconditional upsert: creates the record or overwrites an existing
    /// one with the same key.
    async fn put(&self, task: &Task) -> Result<(), StoreError>;

    /// Writes the `task` and `completed` attributes of the record keyed by
    /// `task.task_id`, leaving any other attributes untouched. No existence
    /// check: on a missing key the record is created with just those fields.
    async fn update(&self, task: &Task) -> Result<(), StoreError>;

    /// Delete by key. Silently succeeds when the key is absent.
    async fn delete(&self, task_id: &str) -> Result<(), StoreError>;
}
