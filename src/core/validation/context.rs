//! Per-request context threaded through a validation pipeline

use serde_json::Value;

/// A record resolved by the existence guard, together with the path id
/// it was resolved from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub id: String,
    pub record: T,
}

/// Everything a pipeline stage may look at
///
/// The context is built once per request and only read by checks. A resolved
/// record can only be attached through [`RequestContext::resolved`], which
/// takes the guard's output.
#[derive(Debug, Clone)]
pub struct RequestContext<T> {
    payload: Value,
    resolved: Option<Resolved<T>>,
}

impl<T> RequestContext<T> {
    /// Context for a request that does not address an existing record
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            resolved: None,
        }
    }

    /// Context for a request whose path id was resolved by the guard
    pub fn resolved(payload: Value, resolved: Resolved<T>) -> Self {
        Self {
            payload,
            resolved: Some(resolved),
        }
    }

    /// The `data` member of the request envelope
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// A single payload field, `None` when absent or when the payload is not an object
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// The identifier taken from the request path, if the guard ran
    pub fn resolved_id(&self) -> Option<&str> {
        self.resolved.as_ref().map(|r| r.id.as_str())
    }

    /// The stored record, if the guard ran
    pub fn record(&self) -> Option<&T> {
        self.resolved.as_ref().map(|r| &r.record)
    }

    /// Hand the payload and resolution back to the mutator
    pub fn into_parts(self) -> (Value, Option<Resolved<T>>) {
        (self.payload, self.resolved)
    }
}
