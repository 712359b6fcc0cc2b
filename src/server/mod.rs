//! HTTP server assembly
//!
//! - [`EntityDescriptor`]s contribute each resource's routes
//! - [`rest`] adds health checks, routing errors and the tower layers
//! - [`ServerBuilder`] wires stores and id generation into a [`axum::Router`]

pub mod builder;
pub mod entity_registry;
pub mod rest;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use rest::RestExposure;
