//! Route registry for dynamic endpoint introspection.
//!
//! This module provides a registry that tracks all registered routes,
//! allowing the root endpoint to return a list of available routes.

use axum::{Router, routing::MethodRouter};
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Information about a registered route.
#[derive(Clone, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/download/{versionId}")
    pub path: String,
    /// The HTTP method (e.g., "get", "post")
    pub method: String,
}

/// A thread-safe registry of routes.
///
/// Routes are registered as they are added to the router,
/// and can be retrieved later for introspection.
#[derive(Clone, Default)]
pub struct RouteRegistry(Arc<RwLock<Vec<RouteInfo>>>);

impl RouteRegistry {
    /// Create a new empty route registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route to the registry.
    pub fn add(&self, path: &str, method: &str) {
        if let Ok(mut routes) = self.0.write() {
            routes.push(RouteInfo {
                path: path.to_string(),
                method: method.to_string(),
            });
        }
    }

    /// Get all registered routes.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.0.read().map(|r| r.clone()).unwrap_or_default()
    }
}

/// Extension trait for registering routes with automatic registry tracking.
pub trait RegisterRoute<S: Clone + Send + Sync + 'static> {
    /// Register a route and track it in the registry.
    ///
    /// # Arguments
    /// * `registry` - The route registry to add the route to
    /// * `path` - The route path (used for both routing and the registry)
    /// * `method` - The HTTP method (e.g., "get", "post")
    /// * `handler` - The route handler
    fn route_registered(
        self,
        registry: &RouteRegistry,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RegisterRoute<S> for Router<S> {
    fn route_registered(
        self,
        registry: &RouteRegistry,
        path: &str,
        method: &str,
        handler: MethodRouter<S>,
    ) -> Self {
        registry.add(path, method);
        self.route(path, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_records_added_routes() {
        let registry = RouteRegistry::new();
        registry.add("/version", "get");
        registry.add("/download/{versionId}", "get");

        let routes = registry.routes();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/version");
        assert_eq!(routes[1].method, "get");
    }
}
