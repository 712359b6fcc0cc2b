//! Order pipelines: guard, checks, then the mutation

use super::model::{Order, OrderDraft};
use super::validators;
use crate::core::validation::{Pipeline, RequestContext};
use crate::core::{ApiError, Collection, IdGenerator, Record, Store};
use serde_json::Value;
use std::sync::Arc;

/// Order operations
pub struct OrderService {
    orders: Collection<Order>,
    create_checks: Pipeline<Order>,
    update_checks: Pipeline<Order>,
    delete_checks: Pipeline<Order>,
}

impl OrderService {
    pub fn new(store: Arc<dyn Store<Order>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            orders: Collection::new(store, ids),
            create_checks: validators::create_pipeline(),
            update_checks: validators::update_pipeline(),
            delete_checks: validators::delete_pipeline(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        self.orders.list().await
    }

    pub async fn create(&self, payload: Value) -> Result<Order, ApiError> {
        let _writer = self.orders.lock().await;

        let ctx = RequestContext::new(payload);
        self.create_checks.run(&ctx)?;

        let (payload, _) = ctx.into_parts();
        let draft = OrderDraft::from_payload(payload)?;
        let order = self
            .orders
            .insert(draft.into_order(self.orders.fresh_id().await?))
            .await?;

        tracing::info!(
            order_id = %order.id,
            dishes = order.dishes.len(),
            status = %order.status,
            "order created"
        );
        Ok(order)
    }

    pub async fn read(&self, id: &str) -> Result<Order, ApiError> {
        Ok(self.orders.resolve(id).await?.record)
    }

    pub async fn update(&self, id: &str, payload: Value) -> Result<Order, ApiError> {
        let _writer = self.orders.lock().await;

        let resolved = self.orders.resolve(id).await?;
        let ctx = RequestContext::resolved(payload, resolved);
        self.update_checks.run(&ctx)?;

        let (payload, resolved) = ctx.into_parts();
        let mut order = resolved
            .map(|r| r.record)
            .ok_or_else(|| ApiError::not_found(Order::label(), id))?;
        let previous = order.status.clone();
        OrderDraft::from_payload(payload)?.apply_to(&mut order);
        let order = self.orders.replace(order).await?;

        tracing::info!(order_id = %order.id, from = %previous, to = %order.status, "order updated");
        Ok(order)
    }

    /// Remove a pending order
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let _writer = self.orders.lock().await;

        let resolved = self.orders.resolve(id).await?;
        let ctx = RequestContext::resolved(Value::Null, resolved);
        self.delete_checks.run(&ctx)?;

        let id = ctx.resolved_id().unwrap_or(id).to_string();
        self.orders.remove(&id).await?;

        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<usize, ApiError> {
        self.orders.len().await
    }
}
