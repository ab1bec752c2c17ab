//! The request dispatcher: one HTTP event in, at most one store call, one
//! JSON response out.
//!
//! Routing is method-only; the gateway owns the path. GET reads (point
//! lookup with a `taskId` query parameter, full scan without), POST upserts,
//! PUT partially updates, DELETE removes. Anything else is rejected. Every
//! failure is mapped to a JSON error response at the top of [`handle`], so
//! the function itself never returns `Err` for request-level problems.

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Error, Request, RequestExt, Response};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::error::HandlerError;
use crate::store::TaskStore;
use crate::types::{DeleteRequest, Task, TaskPayload};

pub async fn handle<S: TaskStore>(store: &S, event: Request) -> Result<Response<Body>, Error> {
    info!(method = %event.method(), "received request");

    match dispatch(store, &event).await {
        Ok(body) => json_response(StatusCode::OK, &body),
        Err(err) => {
            error!(error = %err, "request failed");
            json_response(err.status_code(), &json!({ "error": err.to_string() }))
        }
    }
}

async fn dispatch<S: TaskStore>(store: &S, event: &Request) -> Result<Value, HandlerError> {
    match event.method() {
        &Method::GET => {
            // An empty taskId= is treated the same as no parameter at all.
            let task_id = event
                .query_string_parameters_ref()
                .and_then(|params| params.first("taskId"))
                .filter(|task_id| !task_id.is_empty());
            match task_id {
                Some(task_id) => match store.get(task_id).await? {
                    Some(task) => Ok(serde_json::to_value(task)?),
                    None => Ok(json!({ "message": "Task not found" })),
                },
                None => Ok(serde_json::to_value(store.list().await?)?),
            }
        }
        &Method::POST => {
            let payload: TaskPayload = serde_json::from_slice(event.body().as_ref())?;
            store.put(&Task::from(payload)).await?;
            Ok(json!({ "message": "Task created successfully" }))
        }
        &Method::PUT => {
            let payload: TaskPayload = serde_json::from_slice(event.body().as_ref())?;
            store.update(&Task::from(payload)).await?;
            Ok(json!({ "message": "Task updated successfully" }))
        }
        &Method::DELETE => {
            let payload: DeleteRequest = serde_json::from_slice(event.body().as_ref())?;
            store.delete(&payload.task_id).await?;
            Ok(json!({ "message": "Task deleted successfully" }))
        }
        other => Err(HandlerError::UnsupportedMethod(other.clone())),
    }
}

fn json_response(status: StatusCode, body: &Value) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .map_err(Box::new)?;
    Ok(response)
}
