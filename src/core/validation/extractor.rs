//! Axum extractor for enveloped request payloads
//!
//! This module provides the `Payload` extractor that unwraps the
//! `{ "data": ... }` envelope before the request reaches a handler, turning
//! body-parsing failures into the API's own error format.

use crate::core::envelope::Envelope;
use crate::core::error::ApiError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// The `data` member of a JSON request body
///
/// A body without `data` yields `Value::Null`, which the presence validators
/// then reject field by field. Malformed JSON or a missing JSON content type
/// is rejected here with a `BadRequest`.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(service): State<Arc<DishService>>,
///     Payload(data): Payload,
/// ) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
///     // data is the unwrapped payload, not yet validated
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl Payload {
    /// Get the inner payload
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(envelope): Json<Envelope<Value>> = Json::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        Ok(Payload(envelope.data))
    }
}
