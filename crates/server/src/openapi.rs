// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Version REST API",
        version = "0.1.0",
        description = "REST service that exposes application release metadata and redirects clients to the release artifact.",
        license(name = "GPL-3.0-or-later"),
        contact(url = "https://github.com/paritytech/version-rest-api")
    ),
    servers(
        (url = "http://localhost:3000", description = "Localhost")
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "version", description = "Current release metadata"),
        (name = "download", description = "Artifact download redirect"),
    ),
    paths(
        crate::handlers::health::get_health::get_health,
        crate::handlers::version::get_version::get_version,
        crate::handlers::download::get_download::get_download,
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{self, RouteRegistry};
    use std::collections::BTreeSet;
    use utoipa::OpenApi;

    /// Normalize path parameters: replace `{anything}` with `{}` for structural
    /// comparison, so parameter names may differ between Axum routes and
    /// utoipa annotations.
    fn normalize_path(path: &str) -> String {
        let mut result = String::new();
        let mut in_brace = false;
        for c in path.chars() {
            match c {
                '{' => {
                    in_brace = true;
                    result.push('{');
                }
                '}' => {
                    in_brace = false;
                    result.push('}');
                }
                _ if !in_brace => result.push(c),
                _ => {} // skip param name chars inside braces
            }
        }
        result
    }

    /// Build the full route registry as `create_app` would.
    fn build_full_registry() -> RouteRegistry {
        let registry = RouteRegistry::new();

        let _ = routes::health::routes(&registry);
        let _ = routes::version::routes(&registry);
        let _ = routes::download::routes(&registry);

        registry
    }

    /// Verify that every registered route has a corresponding OpenAPI path and
    /// vice versa. This test catches:
    /// - New routes added without utoipa annotations (undocumented)
    /// - OpenAPI paths that don't correspond to any registered route (phantom docs)
    /// - Path mismatches between route registration and utoipa annotation
    #[test]
    fn openapi_paths_match_registered_routes() {
        let registry = build_full_registry();

        // Collect registered routes as "METHOD /normalized/path"
        let registered: BTreeSet<String> = registry
            .routes()
            .into_iter()
            .map(|r| format!("{} {}", r.method.to_uppercase(), normalize_path(&r.path)))
            .collect();

        // Collect OpenAPI spec paths as "METHOD /normalized/path"
        let spec = ApiDoc::openapi();
        let json_value = serde_json::to_value(&spec).expect("Failed to serialize OpenAPI spec");

        let mut openapi: BTreeSet<String> = BTreeSet::new();
        if let Some(paths) = json_value["paths"].as_object() {
            for (path, methods) in paths {
                if let Some(methods_obj) = methods.as_object() {
                    for method in methods_obj.keys() {
                        if matches!(method.as_str(), "get" | "post" | "put" | "delete" | "patch") {
                            openapi.insert(format!(
                                "{} {}",
                                method.to_uppercase(),
                                normalize_path(path)
                            ));
                        }
                    }
                }
            }
        }

        // Find differences
        let undocumented: Vec<&String> = registered.difference(&openapi).collect();
        let phantom: Vec<&String> = openapi.difference(&registered).collect();

        let mut errors = String::new();

        if !undocumented.is_empty() {
            errors.push_str(
                "\nRoutes registered but MISSING from OpenAPI spec \
                 (add #[utoipa::path] and register in openapi.rs):\n",
            );
            for route in &undocumented {
                errors.push_str(&format!("  - {}\n", route));
            }
        }

        if !phantom.is_empty() {
            errors.push_str(
                "\nRoutes in OpenAPI spec but NOT registered \
                 (stale path in openapi.rs or wrong path= in annotation):\n",
            );
            for route in &phantom {
                errors.push_str(&format!("  - {}\n", route));
            }
        }

        assert!(
            undocumented.is_empty() && phantom.is_empty(),
            "OpenAPI spec is out of sync with registered routes:\n{}",
            errors
        );
    }
}
