//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod validators;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{Order, OrderDraft, OrderStatus, OrderedDish};
pub use service::OrderService;
