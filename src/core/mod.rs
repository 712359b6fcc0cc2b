//! Core module containing the record, storage and validation abstractions

pub mod collection;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod id;
pub mod store;
pub mod validation;

pub use collection::Collection;
pub use entity::Record;
pub use envelope::Envelope;
pub use error::{ApiError, ConfigError, ErrorResponse};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use store::Store;
