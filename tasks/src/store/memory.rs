//! In-memory [`TaskStore`] for the handler tests.
//!
//! Mirrors DynamoDB's write semantics so tests exercise the behavior the
//! production store has: `put` overwrites, `update` upserts a record holding
//! only the written attributes when the key is absent, `delete` on a missing
//! key succeeds silently.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{StoreError, TaskStore};
use crate::types::Task;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tasks: Mutex<HashMap<String, Task>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn get(&self, task_id: &str) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.lock().unwrap().get(task_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.lock().unwrap().values().cloned().collect())
    }

    async fn put(&self, task: &Task) -> Result<(), StoreError> {
        self.tasks
            .lock()
            .unwrap()
            .insert(task.task_id.clone(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> Result<(), StoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.get_mut(&task.task_id) {
            Some(existing) => {
                existing.task = task.task.clone();
                existing.completed = task.completed;
            }
            // UpdateItem with a SET expression creates the item.
            None => {
                tasks.insert(
                    task.task_id.clone(),
                    Task {
                        task_id: task.task_id.clone(),
                        task: task.task.clone(),
                        completed: task.completed,
                        created_at: None,
                    },
                );
            }
        }
        Ok(())
    }

    async fn delete(&self, task_id: &str) -> Result<(), StoreError> {
        self.tasks.lock().unwrap().remove(task_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: &str, desc: &str, completed: bool) -> Task {
        Task {
            task_id: id.into(),
            task: desc.into(),
            completed,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = InMemoryStore::new();
        store.put(&task("t1", "Buy milk", false)).await.unwrap();
        let found = store.get("t1").await.unwrap().expect("task missing");
        assert_eq!(found.task, "Buy milk");
        assert!(!found.completed);
    }

    #[tokio::test]
    async fn put_overwrites_existing_record() {
        let store = InMemoryStore::new();
        let mut first = task("t1", "Buy milk", false);
        first.created_at = Some("2024-05-01T09:00:00Z".into());
        store.put(&first).await.unwrap();
        store.put(&task("t1", "Buy oat milk", true)).await.unwrap();

        let found = store.get("t1").await.unwrap().expect("task missing");
        assert_eq!(found.task, "Buy oat milk");
        // A full put replaces the whole item, createdAt included.
        assert_eq!(found.created_at, None);
    }

    #[tokio::test]
    async fn update_touches_only_task_and_completed() {
        let store = InMemoryStore::new();
        let mut original = task("t1", "Buy milk", false);
        original.created_at = Some("2024-05-01T09:00:00Z".into());
        store.put(&original).await.unwrap();

        store.update(&task("t1", "Buy milk", true)).await.unwrap();
        let found = store.get("t1").await.unwrap().expect("task missing");
        assert!(found.completed);
        assert_eq!(found.created_at.as_deref(), Some("2024-05-01T09:00:00Z"));
    }

    #[tokio::test]
    async fn update_on_missing_key_creates_the_record() {
        let store = InMemoryStore::new();
        store.update(&task("ghost", "Haunt", true)).await.unwrap();
        let found = store.get("ghost").await.unwrap().expect("task missing");
        assert_eq!(found.task, "Haunt");
        assert!(found.completed);
    }

    #[tokio::test]
    async fn delete_is_silent_on_missing_key() {
        let store = InMemoryStore::new();
        store.delete("never-created").await.unwrap();
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn list_returns_every_live_record() {
        let store = InMemoryStore::new();
        store.put(&task("t1", "one", false)).await.unwrap();
        store.put(&task("t2", "two", true)).await.unwrap();
        store.delete("t1").await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].task_id, "t2");
    }
}
