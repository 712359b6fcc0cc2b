//! # GrubDash
//!
//! A small HTTP API for a food-delivery menu (`/dishes`) and its customer
//! orders (`/orders`).
//!
//! Every mutating request passes through a validation pipeline before any
//! state changes:
//!
//! 1. an existence guard resolves the path id to a stored record (404 if absent),
//! 2. an ordered list of presence and domain checks inspects the payload and
//!    the resolved record, stopping at the first failure (400),
//! 3. the mutation runs only when every check passed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_dish_store(InMemoryStore::<Dish>::new())
//!         .serve("127.0.0.1:5000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Collection, Envelope, IdGenerator, Record, SequentialIdGenerator, Store,
        UuidIdGenerator,
        validation::{Payload, Pipeline, RequestContext, Resolved},
    };

    // === Entities ===
    pub use crate::entities::{
        Dish, DishService, Order, OrderService, OrderStatus, OrderedDish,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
