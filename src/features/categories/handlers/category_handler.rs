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
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, ListCategoriesQuery, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    dto.validate()?;

    let category = service.create(dto).await;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List categories with optional filtering
#[utoipa::path(
    get,
    path = "/categories",
    params(ListCategoriesQuery),
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Json<Vec<CategoryResponseDto>> {
    Json(service.list(&query).await)
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get(id).await?;
    Ok(Json(category))
}

/// Partially update a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<Json<CategoryResponseDto>> {
    dto.validate()?;

    let category = service.update(id, dto).await?;
    Ok(Json(category))
}

/// Delete a category
///
/// Fails with 400 while any product still references the category.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Products still reference this category", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
