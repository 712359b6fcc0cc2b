//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod validators;

pub use descriptor::DishDescriptor;
pub use handlers::*;
pub use model::{Dish, DishDraft};
pub use service::DishService;
