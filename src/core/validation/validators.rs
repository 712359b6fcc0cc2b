//! Reusable request validators
//!
//! Each constructor returns a check that plugs into a
//! [`Pipeline`](super::Pipeline). Resource-specific rules live next to their
//! entity (`entities::dish::validators`, `entities::order::validators`).

use super::context::RequestContext;
use crate::core::error::ApiError;
use serde_json::Value;

/// Truthiness of a JSON payload field
///
/// Missing, `null`, `false`, `0` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Render a payload value for an error message (strings without quotes)
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Validator: every listed field is present and truthy
///
/// Fields are checked in the given order and the first missing one is
/// reported. A numeric `0` counts as missing.
pub fn required_fields<T>(
    label: &'static str,
    fields: &'static [&'static str],
) -> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    move |ctx: &RequestContext<T>| {
        match fields.iter().find(|field| !is_truthy(ctx.field(field))) {
            Some(field) => Err(ApiError::bad_request(format!(
                "{} must include a {}",
                label, field
            ))),
            None => Ok(()),
        }
    }
}

/// Validator: a truthy payload `id` must equal the id resolved from the path
///
/// Passes when the payload has no (or a falsy) `id`, or when no record was
/// resolved.
pub fn id_matches_route<T>()
-> impl Fn(&RequestContext<T>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<T>| {
        let (Some(route_id), payload_id) = (ctx.resolved_id(), ctx.field("id")) else {
            return Ok(());
        };

        if !is_truthy(payload_id) || payload_id.and_then(Value::as_str) == Some(route_id) {
            return Ok(());
        }

        Err(ApiError::bad_request(format!(
            "id {} does not match {}",
            display_value(payload_id),
            route_id
        )))
    }
}
