//! Validation pipelines for order requests

use super::model::{Order, OrderStatus};
use crate::core::validation::validators::{display_value, id_matches_route, required_fields};
use crate::core::validation::{Pipeline, RequestContext};
use crate::core::{ApiError, Record};
use serde_json::Value;

/// Required payload fields, in reporting order
pub const REQUIRED_FIELDS: &[&str] = &["deliverTo", "mobileNumber", "dishes"];

/// Validator: `dishes` is a non-empty array
pub fn dishes_not_empty()
-> impl Fn(&RequestContext<Order>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<Order>| match ctx.field("dishes") {
        Some(Value::Array(dishes)) if !dishes.is_empty() => Ok(()),
        _ => Err(ApiError::bad_request("Order must include at least one dish")),
    }
}

/// Validator: every entry in `dishes` has an integer `quantity` of at least 1
///
/// The first offending entry is reported with its index and the value sent.
pub fn quantities_are_positive()
-> impl Fn(&RequestContext<Order>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<Order>| {
        let Some(Value::Array(dishes)) = ctx.field("dishes") else {
            return Ok(());
        };

        for (index, dish) in dishes.iter().enumerate() {
            let quantity = dish.get("quantity");
            let valid = quantity
                .and_then(Value::as_u64)
                .is_some_and(|q| q >= 1 && u32::try_from(q).is_ok());

            if !valid {
                return Err(ApiError::bad_request(format!(
                    "Dish {} must have a quantity that is an integer greater than 0. Quantity entered: {}",
                    index,
                    display_value(quantity)
                )));
            }
        }
        Ok(())
    }
}

/// Validator: `status` is a non-empty string other than the `invalid` sentinel
pub fn status_is_valid()
-> impl Fn(&RequestContext<Order>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<Order>| match ctx.field("status").and_then(Value::as_str) {
        Some(status) if OrderStatus::from(status).is_accepted() => Ok(()),
        _ => Err(ApiError::bad_request("order status is invalid")),
    }
}

/// Validator: the stored order is still pending
pub fn status_is_pending()
-> impl Fn(&RequestContext<Order>) -> Result<(), ApiError> + Send + Sync + Clone {
    |ctx: &RequestContext<Order>| match ctx.record() {
        Some(order) if order.status.is_pending() => Ok(()),
        Some(_) => Err(ApiError::bad_request("order status is not pending")),
        None => Err(ApiError::Internal(
            "pending check ran without a resolved order".to_string(),
        )),
    }
}

/// Checks run before an order is created
pub fn create_pipeline() -> Pipeline<Order> {
    Pipeline::new("order.create")
        .check("required_fields", required_fields::<Order>(Order::label(), REQUIRED_FIELDS))
        .check("dishes", dishes_not_empty())
        .check("quantities", quantities_are_positive())
}

/// Checks run after the guard, before an order is updated
pub fn update_pipeline() -> Pipeline<Order> {
    Pipeline::new("order.update")
        .check("required_fields", required_fields::<Order>(Order::label(), REQUIRED_FIELDS))
        .check("dishes", dishes_not_empty())
        .check("quantities", quantities_are_positive())
        .check("id", id_matches_route::<Order>())
        .check("status", status_is_valid())
}

/// Checks run after the guard, before an order is deleted
pub fn delete_pipeline() -> Pipeline<Order> {
    Pipeline::new("order.delete").check("pending", status_is_pending())
}
