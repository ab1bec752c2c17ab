//! DynamoDB-backed [`TaskStore`].
//!
//! One table, simple primary key `taskId` (String). Attributes map 1:1 to
//! [`Task`] fields: `task` (S), `completed` (BOOL), `createdAt` (S,
//! optional). The five trait operations map to `GetItem`, `Scan`, `PutItem`,
//! `UpdateItem` and `DeleteItem`; the partial update names exactly the
//! `task` and `completed` attributes so anything else on the item survives.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use async_trait::async_trait;

use crate::store::{StoreError, TaskStore};
use crate::types::Task;

#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Wraps a pre-built client. The table must already exist with `taskId`
    /// as its partition key.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

/// Maps an AWS SDK error to a [`StoreError`], keeping the original error in
/// the source chain.
fn map_sdk_error(
    err: impl std::error::Error + Send + Sync + 'static,
    context: &str,
) -> StoreError {
    StoreError::with_source(format!("DynamoDB {context} failed: {err}"), err)
}

/// Reads a [`Task`] out of a raw DynamoDB item.
fn parse_item(item: &HashMap<String, AttributeValue>) -> Result<Task, StoreError> {
    let task_id = item
        .get("taskId")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| StoreError::new("item is missing the taskId attribute"))?;
    let task = item
        .get("task")
        .and_then(|v| v.as_s().ok())
        .ok_or_else(|| StoreError::new(format!("item {task_id} is missing the task attribute")))?;
    let completed = item
        .get("completed")
        .and_then(|v| v.as_bool().ok())
        .ok_or_else(|| {
            StoreError::new(format!("item {task_id} is missing the completed attribute"))
        })?;
    let created_at = item
        .get("createdAt")
        .and_then(|v| v.as_s().ok())
        .map(String::from);

    Ok(Task {
        task_id: task_id.clone(),
        task: task.clone(),
        completed: *completed,
        created_at,
    })
}

#[async_trait]
impl TaskStore for DynamoDbStore {
    async fn get(&self, task_id: &str) -> Result<Option<Task>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("taskId", AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "GetItem"))?;

        output.item().map(parse_item).transpose()
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let mut tasks = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let mut scan = self.client.scan().table_name(&self.table_name);
            if let Some(start_key) = exclusive_start_key.take() {
                scan = scan.set_exclusive_start_key(Some(start_key));
            }

            let output = scan.send().await.map_err(|e| map_sdk_error(e, "Scan"))?;

            for item in output.items() {
                tasks.push(parse_item(item)?);
            }

            match output.last_evaluated_key() {
                Some(last_key) if !last_key.is_empty() => {
                    exclusive_start_key = Some(last_key.clone());
                }
                _ => break,
            }
        }

        Ok(tasks)
    }

    async fn put(&self, task: &Task) -> Result<(), StoreError> {
        let mut builder = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item("taskId", AttributeValue::S(task.task_id.clone()))
            .item("task", AttributeValue::S(task.task.clone()))
            .item("completed", AttributeValue::Bool(task.completed));

        if let Some(created_at) = &task.created_at {
            builder = builder.item("createdAt", AttributeValue::S(created_at.clone()));
        }

        builder
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "PutItem"))?;
        Ok(())
    }

    async fn update(&self, task: &Task) -> Result<(), StoreError> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("taskId", AttributeValue::S(task.task_id.clone()))
            .update_expression("SET #t = :task, #c = :completed")
            .expression_attribute_names("#t", "task")
            .expression_attribute_names("#c", "completed")
            .expression_attribute_values(":task", AttributeValue::S(task.task.clone()))
            .expression_attribute_values(":completed", AttributeValue::Bool(task.completed))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "UpdateItem"))?;
        Ok(())
    }

    async fn delete(&self, task_id: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("taskId", AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "DeleteItem"))?;
        Ok(())
    }
}
