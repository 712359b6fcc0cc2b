//! Entity registry collecting the routes of every resource

use axum::Router;
use indexmap::IndexMap;

/// Describes how to build the routes of one resource
///
/// Implemented by each entity module (dishes, orders).
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form, also the collection path segment (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST /{plural}
    /// - GET/PUT /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: IndexMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering it again replaces the
    /// earlier descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(entity = %entity_type, plural = descriptor.plural(), "entity registered");
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge the routes of every registered entity
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
