//! Typed error handling for the GrubDash API
//!
//! Every expected failure of a request pipeline is modelled as an explicit
//! [`ApiError`] variant rather than a panic or an opaque `anyhow::Error`:
//!
//! - [`ApiError::NotFound`]: the existence guard could not resolve an id (404)
//! - [`ApiError::BadRequest`]: a presence or domain check rejected the payload (400)
//! - [`ApiError::PathNotFound`]: no route matches the request path (404)
//! - [`ApiError::MethodNotAllowed`]: the route exists but not for this method (405)
//! - [`ApiError::Internal`]: a store failure, never produced by a validator (500)
//!
//! Errors render as `{ "status": <code>, "message": <string> }` with the
//! matching HTTP status.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.read("42").await {
//!     Ok(dish) => println!("Found: {}", dish.name),
//!     Err(ApiError::NotFound { id, .. }) => println!("No dish {}", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type returned by every pipeline stage and handler
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No record with this identifier exists in the collection
    NotFound {
        /// Human label of the collection's record type ("Dish", "Order")
        entity: &'static str,
        id: String,
    },

    /// The request payload failed a presence or domain rule
    BadRequest { message: String },

    /// No route matches the request path
    PathNotFound { path: String },

    /// The path exists but does not accept this HTTP method
    MethodNotAllowed { method: String, path: String },

    /// Unexpected failure in a collaborator (storage, id generation)
    Internal(String),
}

impl ApiError {
    /// Shorthand for a `NotFound` on the given record label
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Shorthand for a `BadRequest` with a human-readable message
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } | ApiError::PathNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the wire representation
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { entity, id } => write!(f, "{} id not found: {}", entity, id),
            ApiError::BadRequest { message } => write!(f, "{}", message),
            ApiError::PathNotFound { path } => write!(f, "Path not found: {}", path),
            ApiError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Store and id-generation failures surface as 500s
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "internal failure while handling request");
        ApiError::Internal(err.to_string())
    }
}

/// Error body sent to clients
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Errors raised while loading or validating the service configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("duplicate {entity} id '{id}' in seed data")]
    DuplicateSeedId { entity: &'static str, id: String },
}
