//! Task record and request payloads.

use serde::{Deserialize, Serialize};

/// A single to-do item, keyed by `taskId`.
///
/// `createdAt` is never written by this handler; it is preserved verbatim on
/// items that already carry it and omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: String,
    pub task: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// POST/PUT request body: exactly the three caller-writable fields.
///
/// A client-supplied `createdAt` is not part of the schema and is dropped
/// with any other unknown field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub task_id: String,
    pub task: String,
    pub completed: bool,
}

impl From<TaskPayload> for Task {
    fn from(payload: TaskPayload) -> Self {
        Self {
            task_id: payload.task_id,
            task: payload.task,
            completed: payload.completed,
            created_at: None,
        }
    }
}

/// DELETE request body: only the key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub task_id: String,
}
