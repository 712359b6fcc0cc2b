//! Dish HTTP handlers

use super::{model::Dish, service::DishService};
use crate::core::validation::Payload;
use crate::core::{ApiError, Envelope};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

pub async fn list_dishes(
    State(service): State<Arc<DishService>>,
) -> Result<Json<Envelope<Vec<Dish>>>, ApiError> {
    Ok(Json(Envelope::new(service.list().await?)))
}

pub async fn create_dish(
    State(service): State<Arc<DishService>>,
    Payload(data): Payload,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
    let dish = service.create(data).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

pub async fn get_dish(
    State(service): State<Arc<DishService>>,
    Path(dish_id): Path<String>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    Ok(Json(Envelope::new(service.read(&dish_id).await?)))
}

pub async fn update_dish(
    State(service): State<Arc<DishService>>,
    Path(dish_id): Path<String>,
    Payload(data): Payload,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    Ok(Json(Envelope::new(service.update(&dish_id, data).await?)))
}
