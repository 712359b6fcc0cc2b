//! Order entity model and its status lifecycle

use crate::core::{ApiError, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle status of an order
///
/// The four known states are named; any other non-empty string is carried
/// verbatim in [`OrderStatus::Other`]. `invalid` is a sentinel that update
/// requests may never set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Invalid,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Invalid => "invalid",
            OrderStatus::Other(s) => s,
        }
    }

    /// Only pending orders may be deleted
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    /// Whether an update may move an order into this status
    pub fn is_accepted(&self) -> bool {
        !matches!(self, OrderStatus::Invalid) && !self.as_str().is_empty()
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "out-for-delivery" => OrderStatus::OutForDelivery,
            "delivered" => OrderStatus::Delivered,
            "invalid" => OrderStatus::Invalid,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        OrderStatus::from(s.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: a reference to a dish plus how many of it
///
/// Whatever dish fields the client sends (id, name, price, ...) are kept
/// as-is next to `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedDish {
    /// At least 1
    pub quantity: u32,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    /// Never empty
    pub dishes: Vec<OrderedDish>,
}

impl Record for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn label() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// The mutable fields of an order, as read from a validated payload
///
/// A create payload without `status` starts the order as `pending`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderedDish>,
}

impl OrderDraft {
    pub fn from_payload(payload: Value) -> Result<Self, ApiError> {
        serde_json::from_value(payload)
            .map_err(|e| ApiError::bad_request(format!("Invalid order: {}", e)))
    }

    /// Build a brand-new order under `id`
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status,
            dishes: self.dishes,
        }
    }

    /// Overwrite every mutable field of `order`; the id is left alone
    pub fn apply_to(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        order.status = self.status;
        order.dishes = self.dishes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_round_trips_known_and_free_form() {
        for (raw, status) in [
            ("pending", OrderStatus::Pending),
            ("out-for-delivery", OrderStatus::OutForDelivery),
            ("cooling", OrderStatus::Other("cooling".to_string())),
        ] {
            let parsed: OrderStatus = serde_json::from_value(json!(raw)).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(serde_json::to_value(&parsed).unwrap(), json!(raw));
        }
    }

    #[test]
    fn test_status_flags() {
        assert!(OrderStatus::Pending.is_pending());
        assert!(!OrderStatus::Delivered.is_pending());
        assert!(!OrderStatus::Invalid.is_accepted());
        assert!(!OrderStatus::from("").is_accepted());
        assert!(OrderStatus::from("anything").is_accepted());
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_uses_camel_case_fields() {
        let order = Order {
            id: "1".to_string(),
            deliver_to: "Rainbow Road".to_string(),
            mobile_number: "555".to_string(),
            status: OrderStatus::Preparing,
            dishes: vec![],
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["deliverTo"], "Rainbow Road");
        assert_eq!(value["mobileNumber"], "555");
        assert_eq!(value["status"], "preparing");
    }

    #[test]
    fn test_ordered_dish_keeps_reference_fields() {
        let line: OrderedDish =
            serde_json::from_value(json!({"id": "d1", "name": "Taco", "price": 3, "quantity": 2}))
                .unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.dish["name"], "Taco");
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({"id": "d1", "name": "Taco", "price": 3, "quantity": 2})
        );
    }

    #[test]
    fn test_draft_defaults_status_to_pending() {
        let draft = OrderDraft::from_payload(json!({
            "deliverTo": "here",
            "mobileNumber": "1",
            "dishes": [{"quantity": 1}]
        }))
        .unwrap();
        assert_eq!(draft.status, OrderStatus::Pending);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut order = OrderDraft::from_payload(json!({
            "deliverTo": "a",
            "mobileNumber": "1",
            "dishes": [{"quantity": 1}]
        }))
        .unwrap()
        .into_order("9".to_string());

        OrderDraft::from_payload(json!({
            "deliverTo": "b",
            "mobileNumber": "2",
            "status": "delivered",
            "dishes": [{"quantity": 3}]
        }))
        .unwrap()
        .apply_to(&mut order);

        assert_eq!(order.id, "9");
        assert_eq!(order.deliver_to, "b");
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.dishes[0].quantity, 3);
    }
}
