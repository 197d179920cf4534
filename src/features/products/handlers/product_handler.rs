use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{ErrorBody, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{
    CreateProductDto, ListProductsQuery, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;

/// Create a new product
///
/// The referenced category must exist.
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponseDto),
        (status = 400, description = "Referenced category does not exist", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    dto.validate()?;

    let product = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List products with optional filtering
#[utoipa::path(
    get,
    path = "/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    Query(query): Query<ListProductsQuery>,
) -> Json<Vec<ProductResponseDto>> {
    Json(service.list(&query).await)
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get(id).await?;
    Ok(Json(product))
}

/// Partially update a product
///
/// A supplied `category_id` must name an existing category.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 400, description = "Referenced category does not exist", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ProductResponseDto>> {
    dto.validate()?;

    let product = service.update(id, dto).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
