//! Dish entity model

use crate::core::{ApiError, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Always strictly positive
    pub price: f64,
    pub image_url: String,
}

impl Record for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn label() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// The mutable fields of a dish, as read from a validated payload
///
/// Unknown payload fields (including `id`) are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl DishDraft {
    pub fn from_payload(payload: Value) -> Result<Self, ApiError> {
        serde_json::from_value(payload)
            .map_err(|e| ApiError::bad_request(format!("Invalid dish: {}", e)))
    }

    /// Build a brand-new dish under `id`
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }

    /// Overwrite every mutable field of `dish`; the id is left alone
    pub fn apply_to(self, dish: &mut Dish) {
        dish.name = self.name;
        dish.description = self.description;
        dish.price = self.price;
        dish.image_url = self.image_url;
    }
}
