//! Record trait shared by every stored resource

use serde::Serialize;

/// A record held in one of the service's collections.
///
/// Records are keyed by a string identifier assigned at creation time and
/// never changed afterwards.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// Human label used in error messages (e.g., "Dish")
    fn label() -> &'static str;

    /// Get the unique identifier of this record
    fn id(&self) -> &str;
}
