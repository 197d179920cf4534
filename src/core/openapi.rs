use utoipa::{Modify, OpenApi};

use crate::core::error::{ErrorBody, ErrorDetail};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handlers::service_info,
        health_handlers::get_health,
        health_handlers::get_health_with_path,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::create_product,
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::update_product,
        products_handlers::delete_product,
    ),
    components(
        schemas(
            // Shared
            ErrorBody,
            ErrorDetail,
            // Health
            health_dtos::HealthResponseDto,
            health_dtos::ServiceInfoDto,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            // Products
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            products_dtos::ProductResponseDto,
        )
    ),
    tags(
        (name = "health", description = "Service liveness and echo endpoints"),
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Catalog products"),
    ),
    info(
        title = "University Bookstore API",
        version = "0.1.0",
        description = "Bookstore catalog service for managing products and categories",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
