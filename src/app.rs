use std::sync::Arc;

use axum::Router;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::health::{routes as health_routes, HealthService};
use crate::features::products::{routes as products_routes, ProductService};
use crate::modules::store::CatalogStore;

/// Assemble the API routes over a shared catalog store.
///
/// Kept separate from [`create_app`] so tests can drive the routes without
/// the swagger and middleware stack.
pub fn api_router(store: Arc<CatalogStore>, advertised_address: String) -> Router {
    let health_service = Arc::new(HealthService::new(advertised_address));
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let product_service = Arc::new(ProductService::new(store));

    Router::new()
        .merge(health_routes::routes(health_service))
        .merge(categories_routes::routes(category_service))
        .merge(products_routes::routes(product_service))
}

/// Build the full application: API routes, swagger UI, and middleware layers
pub fn create_app(config: &Config) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    let store = Arc::new(CatalogStore::new());

    Router::new()
        .merge(swagger)
        .merge(api_router(store, config.app.server_address()))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
