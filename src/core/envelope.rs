//! The `{ "data": ... }` wrapper used for every request and response body

use serde::{Deserialize, Serialize};

/// Body envelope shared by requests and responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
