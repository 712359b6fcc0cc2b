//! ServerBuilder for assembling the GrubDash router

use super::entity_registry::EntityRegistry;
use super::rest::RestExposure;
use crate::config::AppConfig;
use crate::core::{IdGenerator, Store, UuidIdGenerator};
use crate::entities::{Dish, DishDescriptor, DishService, Order, OrderDescriptor, OrderService};
use crate::storage::InMemoryStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the HTTP application
///
/// Stores and the id generator are injected; anything left unset falls back
/// to an empty [`InMemoryStore`] and a [`UuidIdGenerator`].
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_id_generator(SequentialIdGenerator::default())
///     .with_cors(false)
///     .build()?;
/// ```
pub struct ServerBuilder {
    dish_store: Option<Arc<dyn Store<Dish>>>,
    order_store: Option<Arc<dyn Store<Order>>>,
    id_generator: Option<Arc<dyn IdGenerator>>,
    cors: bool,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            dish_store: None,
            order_store: None,
            id_generator: None,
            cors: true,
            custom_routes: Vec::new(),
        }
    }

    /// Builder seeded from a loaded configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let dishes = InMemoryStore::with_records(config.seed.dishes.clone())?;
        let orders = InMemoryStore::with_records(config.seed.orders.clone())?;

        tracing::info!(
            dishes = config.seed.dishes.len(),
            orders = config.seed.orders.len(),
            "stores seeded from config"
        );

        Ok(Self::new()
            .with_dish_store(dishes)
            .with_order_store(orders)
            .with_cors(config.cors))
    }

    pub fn with_dish_store(mut self, store: impl Store<Dish> + 'static) -> Self {
        self.dish_store = Some(Arc::new(store));
        self
    }

    pub fn with_order_store(mut self, store: impl Store<Order> + 'static) -> Self {
        self.order_store = Some(Arc::new(store));
        self
    }

    /// Id generator shared by both collections
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Arc::new(ids));
        self
    }

    /// Enable or disable the permissive CORS layer (on by default)
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }

    /// Add routes outside the two resources
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let ids = self
            .id_generator
            .unwrap_or_else(|| Arc::new(UuidIdGenerator));
        let dish_store = self
            .dish_store
            .unwrap_or_else(|| Arc::new(InMemoryStore::<Dish>::new()));
        let order_store = self
            .order_store
            .unwrap_or_else(|| Arc::new(InMemoryStore::<Order>::new()));

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(Arc::new(DishService::new(
            dish_store,
            ids.clone(),
        )))));
        registry.register(Box::new(OrderDescriptor::new(Arc::new(OrderService::new(
            order_store,
            ids,
        )))));

        Ok(RestExposure::build_router(
            &registry,
            self.custom_routes,
            self.cors,
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `addr`, serves until SIGTERM or Ctrl+C, then drains in-flight
    /// requests.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
