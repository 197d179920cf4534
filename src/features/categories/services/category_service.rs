use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, ListCategoriesQuery, UpdateCategoryDto,
};
use crate::features::categories::models::Category;
use crate::modules::store::CatalogStore;

/// Service for category operations
pub struct CategoryService {
    store: Arc<CatalogStore>,
}

impl CategoryService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a category with a fresh id and both timestamps set to now.
    ///
    /// Cannot fail once the payload has passed validation.
    pub async fn create(&self, dto: CreateCategoryDto) -> CategoryResponseDto {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: dto.name,
            description: dto.description,
            is_active: dto.is_active,
            created_at: now,
            updated_at: now,
        };

        let mut state = self.store.write().await;
        state.categories.insert(category.id, category.clone());

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        category.into()
    }

    /// List categories matching the filters; filters compose as a logical AND
    pub async fn list(&self, query: &ListCategoriesQuery) -> Vec<CategoryResponseDto> {
        let state = self.store.read().await;
        state
            .categories
            .values()
            .filter(|c| match &query.name {
                Some(name) => c.name.to_lowercase().contains(&name.to_lowercase()),
                None => true,
            })
            .filter(|c| query.is_active.map_or(true, |active| c.is_active == active))
            .cloned()
            .map(Into::into)
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let state = self.store.read().await;
        state
            .categories
            .get(&id)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Merge the supplied fields onto an existing category and refresh
    /// `updated_at`
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let mut state = self.store.write().await;
        let category = state
            .categories
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        if let Some(name) = dto.name {
            category.name = name;
        }
        if let Some(description) = dto.description {
            category.description = description;
        }
        if let Some(is_active) = dto.is_active {
            category.is_active = is_active;
        }
        category.updated_at = Utc::now();

        tracing::info!("Category updated: id={}", id);

        Ok(category.clone().into())
    }

    /// Remove a category unless products still reference it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.store.write().await;
        if !state.categories.contains_key(&id) {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        let referencing = state
            .products
            .values()
            .filter(|p| p.category_id == id)
            .count();
        if referencing > 0 {
            tracing::warn!(
                "Category delete blocked: id={}, referencing_products={}",
                id,
                referencing
            );
            return Err(AppError::Conflict(format!(
                "Cannot delete category. {} products are using this category.",
                referencing
            )));
        }

        state.categories.remove(&id);
        tracing::info!("Category deleted: id={}", id);

        Ok(())
    }
}
