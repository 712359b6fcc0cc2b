//! The two resources served by the API

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor, DishService};
pub use order::{Order, OrderDescriptor, OrderService, OrderStatus, OrderedDish};
