//! Entity descriptor for Dish

use super::handlers::{create_dish, get_dish, list_dishes, update_dish};
use super::service::DishService;
use crate::server::EntityDescriptor;
use crate::server::rest::method_not_allowed;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    pub service: Arc<DishService>,
}

impl DishDescriptor {
    pub fn new(service: Arc<DishService>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dish_id}",
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(self.service.clone())
    }
}
