//! Request validation pipeline
//!
//! Mutating requests pass through an ordered chain of checks before anything
//! is written:
//!
//! 1. the existence [`guard`] resolves the path id to a stored record,
//! 2. a [`Pipeline`] of presence and domain checks inspects the payload
//!    and the resolved record,
//! 3. the resource's mutator runs only if every check passed.
//!
//! The first failure short-circuits with an [`ApiError`](crate::core::ApiError).

pub mod context;
pub mod extractor;
pub mod guard;
pub mod pipeline;
pub mod validators;

pub use context::{RequestContext, Resolved};
pub use extractor::Payload;
pub use pipeline::Pipeline;
