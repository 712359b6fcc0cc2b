//! Existence guard: path identifier → stored record

use super::context::Resolved;
use crate::core::{ApiError, Record, Store};

/// Resolve `id` against `store`, or fail with `NotFound` naming the id
///
/// Must run before any stage that looks at the stored record.
pub async fn resolve<T, S>(store: &S, id: &str) -> Result<Resolved<T>, ApiError>
where
    T: Record,
    S: Store<T> + ?Sized,
{
    match store.find(id).await? {
        Some(record) => Ok(Resolved {
            id: id.to_string(),
            record,
        }),
        None => {
            tracing::debug!(entity = T::label(), id, "record not found");
            Err(ApiError::not_found(T::label(), id))
        }
    }
}
