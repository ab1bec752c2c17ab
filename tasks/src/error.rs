//! Dispatcher error taxonomy and its HTTP status mapping.

use lambda_http::http::{Method, StatusCode};
use thiserror::Error;

use crate::store::StoreError;

/// Everything that can go wrong while dispatching one request.
///
/// Client faults (a body that does not parse into the expected schema, a
/// method outside the supported five) map to 400; store faults map to 500.
/// A missing record on GET is not an error, the dispatcher answers it with
/// a sentinel body.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("malformed request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(Method),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Body(_) | Self::UnsupportedMethod(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
