//! HTTP round-trips for /dishes

mod common;

use axum::http::StatusCode;
use common::{TACO_ID, dish_payload, envelope, server};
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_dishes() {
    let server = server();

    let response = server.get("/dishes").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let dishes = body["data"].as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["id"], TACO_ID);
}

#[tokio::test]
async fn test_create_dish() {
    let server = server();

    let response = server.post("/dishes").json(&envelope(dish_payload())).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(
        body["data"],
        json!({"id": "1", "name": "Taco", "description": "d", "price": 5.0, "image_url": "u"})
    );

    let list: Value = server.get("/dishes").await.json();
    assert_eq!(list["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_dish_reports_first_missing_field() {
    let server = server();

    let mut payload = dish_payload();
    payload.as_object_mut().unwrap().remove("description");
    payload["name"] = json!("");

    let response = server.post("/dishes").json(&envelope(payload)).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"status": 400, "message": "Dish must include a name"}));
}

#[tokio::test]
async fn test_create_dish_rejects_bad_price() {
    let server = server();

    for price in [json!(-1), json!("5")] {
        let mut payload = dish_payload();
        payload["price"] = price;

        let response = server.post("/dishes").json(&envelope(payload)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Field 'price' must be a number above zero.");
    }

    let list: Value = server.get("/dishes").await.json();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_dish_without_data_member() {
    let server = server();

    let response = server.post("/dishes").json(&dish_payload()).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Dish must include a name");
}

#[tokio::test]
async fn test_read_dish() {
    let server = server();

    let response = server.get(&format!("/dishes/{}", TACO_ID)).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Taco");
}

#[tokio::test]
async fn test_read_unknown_dish() {
    let server = server();

    let response = server.get("/dishes/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"status": 404, "message": "Dish id not found: nope"}));
}

#[tokio::test]
async fn test_update_dish() {
    let server = server();

    let mut payload = dish_payload();
    payload["id"] = json!(TACO_ID);
    payload["name"] = json!("Al pastor taco");

    let response = server
        .put(&format!("/dishes/{}", TACO_ID))
        .json(&envelope(payload))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["id"], TACO_ID);
    assert_eq!(body["data"]["name"], "Al pastor taco");
}

#[tokio::test]
async fn test_update_dish_id_mismatch() {
    let server = server();

    let mut payload = dish_payload();
    payload["id"] = json!("d2");

    let response = server
        .put(&format!("/dishes/{}", TACO_ID))
        .json(&envelope(payload))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "id d2 does not match d1");

    let stored: Value = server.get(&format!("/dishes/{}", TACO_ID)).await.json();
    assert_eq!(stored["data"]["description"], "Corn tortilla, carnitas");
}

#[tokio::test]
async fn test_update_unknown_dish_is_404_before_validation() {
    let server = server();

    let response = server.put("/dishes/ghost").json(&envelope(json!({}))).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_dish_not_allowed() {
    let server = server();

    let response = server.delete(&format!("/dishes/{}", TACO_ID)).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({
        "status": 405,
        "message": format!("DELETE not allowed for /dishes/{}", TACO_ID)
    }));
}
