//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

pub const TACO_ID: &str = "d1";
pub const PENDING_ORDER_ID: &str = "o-pending";
pub const DELIVERED_ORDER_ID: &str = "o-delivered";

pub fn seed_dishes() -> Vec<Dish> {
    vec![Dish {
        id: TACO_ID.to_string(),
        name: "Taco".to_string(),
        description: "Corn tortilla, carnitas".to_string(),
        price: 3.5,
        image_url: "https://images.example.com/taco.jpg".to_string(),
    }]
}

pub fn seed_orders() -> Vec<Order> {
    let line: OrderedDish = serde_json::from_value(json!({
        "id": TACO_ID,
        "name": "Taco",
        "price": 3.5,
        "quantity": 2
    }))
    .unwrap();

    vec![
        Order {
            id: PENDING_ORDER_ID.to_string(),
            deliver_to: "221B Baker Street".to_string(),
            mobile_number: "020 7946 0000".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![line.clone()],
        },
        Order {
            id: DELIVERED_ORDER_ID.to_string(),
            deliver_to: "4 Privet Drive".to_string(),
            mobile_number: "01632 960000".to_string(),
            status: OrderStatus::Delivered,
            dishes: vec![line],
        },
    ]
}

/// Server over seeded stores with sequential ids ("1", "2", ...)
pub fn server() -> TestServer {
    let router = ServerBuilder::new()
        .with_dish_store(InMemoryStore::with_records(seed_dishes()).unwrap())
        .with_order_store(InMemoryStore::with_records(seed_orders()).unwrap())
        .with_id_generator(SequentialIdGenerator::default())
        .build()
        .unwrap();
    TestServer::new(router)
}

pub fn dish_payload() -> Value {
    json!({
        "name": "Taco",
        "description": "d",
        "price": 5,
        "image_url": "u"
    })
}

pub fn order_payload(status: &str) -> Value {
    json!({
        "deliverTo": "742 Evergreen Terrace",
        "mobileNumber": "(939) 555-0113",
        "status": status,
        "dishes": [{"id": TACO_ID, "name": "Taco", "price": 3.5, "quantity": 1}]
    })
}

pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}
