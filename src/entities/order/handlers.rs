//! Order HTTP handlers

use super::{model::Order, service::OrderService};
use crate::core::validation::Payload;
use crate::core::{ApiError, Envelope};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

pub async fn list_orders(
    State(service): State<Arc<OrderService>>,
) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    Ok(Json(Envelope::new(service.list().await?)))
}

pub async fn create_order(
    State(service): State<Arc<OrderService>>,
    Payload(data): Payload,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let order = service.create(data).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

pub async fn get_order(
    State(service): State<Arc<OrderService>>,
    Path(order_id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    Ok(Json(Envelope::new(service.read(&order_id).await?)))
}

pub async fn update_order(
    State(service): State<Arc<OrderService>>,
    Path(order_id): Path<String>,
    Payload(data): Payload,
) -> Result<Json<Envelope<Order>>, ApiError> {
    Ok(Json(Envelope::new(service.update(&order_id, data).await?)))
}

/// No body on success
pub async fn delete_order(
    State(service): State<Arc<OrderService>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(&order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
