//! Dish pipelines: guard, checks, then the mutation

use super::model::{Dish, DishDraft};
use super::validators;
use crate::core::validation::{Pipeline, RequestContext};
use crate::core::{ApiError, Collection, IdGenerator, Record, Store};
use serde_json::Value;
use std::sync::Arc;

/// Menu operations; dishes are never deleted
pub struct DishService {
    dishes: Collection<Dish>,
    create_checks: Pipeline<Dish>,
    update_checks: Pipeline<Dish>,
}

impl DishService {
    pub fn new(store: Arc<dyn Store<Dish>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            dishes: Collection::new(store, ids),
            create_checks: validators::create_pipeline(),
            update_checks: validators::update_pipeline(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Dish>, ApiError> {
        self.dishes.list().await
    }

    pub async fn create(&self, payload: Value) -> Result<Dish, ApiError> {
        let _writer = self.dishes.lock().await;

        let ctx = RequestContext::new(payload);
        self.create_checks.run(&ctx)?;

        let (payload, _) = ctx.into_parts();
        let draft = DishDraft::from_payload(payload)?;
        let dish = self
            .dishes
            .insert(draft.into_dish(self.dishes.fresh_id().await?))
            .await?;

        tracing::info!(dish_id = %dish.id, name = %dish.name, "dish created");
        Ok(dish)
    }

    pub async fn read(&self, id: &str) -> Result<Dish, ApiError> {
        Ok(self.dishes.resolve(id).await?.record)
    }

    pub async fn update(&self, id: &str, payload: Value) -> Result<Dish, ApiError> {
        let _writer = self.dishes.lock().await;

        let resolved = self.dishes.resolve(id).await?;
        let ctx = RequestContext::resolved(payload, resolved);
        self.update_checks.run(&ctx)?;

        let (payload, resolved) = ctx.into_parts();
        let mut dish = resolved
            .map(|r| r.record)
            .ok_or_else(|| ApiError::not_found(Dish::label(), id))?;
        DishDraft::from_payload(payload)?.apply_to(&mut dish);
        let dish = self.dishes.replace(dish).await?;

        tracing::info!(dish_id = %dish.id, "dish updated");
        Ok(dish)
    }

    /// Number of dishes on the menu
    pub async fn count(&self) -> Result<usize, ApiError> {
        self.dishes.len().await
    }
}
