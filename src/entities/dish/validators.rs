//! Validation pipelines for dish requests

use super::model::Dish;
use crate::core::{ApiError, Record};
use crate::core::validation::validators::{id_matches_route, required_fields};
use crate::core::validation::{Pipeline, RequestContext};
use serde_json::Value;

/// Required payload fields, in reporting order
pub const REQUIRED_FIELDS: &[&str] = &["name", "description", "price", "image_url"];

/// Validator: `price` is a JSON number greater than zero
pub fn price_is_positive()
-> impl Fn(&RequestContext<Dish>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<Dish>| match ctx.field("price").and_then(Value::as_f64) {
        Some(price) if price > 0.0 => Ok(()),
        _ => Err(ApiError::bad_request(
            "Field 'price' must be a number above zero.",
        )),
    }
}

/// Checks run before a dish is created
pub fn create_pipeline() -> Pipeline<Dish> {
    Pipeline::new("dish.create")
        .check("required_fields", required_fields::<Dish>(Dish::label(), REQUIRED_FIELDS))
        .check("price", price_is_positive())
}

/// Checks run after the guard, before a dish is updated
pub fn update_pipeline() -> Pipeline<Dish> {
    Pipeline::new("dish.update")
        .check("required_fields", required_fields::<Dish>(Dish::label(), REQUIRED_FIELDS))
        .check("price", price_is_positive())
        .check("id", id_matches_route::<Dish>())
}
