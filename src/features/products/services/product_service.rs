use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{
    CreateProductDto, ListProductsQuery, ProductResponseDto, UpdateProductDto,
};
use crate::features::products::models::Product;
use crate::modules::store::CatalogStore;

/// Service for product operations
///
/// Every mutation that names a `category_id` verifies the reference under
/// the same store guard it mutates under, so a product can never be inserted
/// against a category that a concurrent request is deleting.
pub struct ProductService {
    store: Arc<CatalogStore>,
}

impl ProductService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Create a product after checking its category reference
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let mut state = self.store.write().await;
        if !state.categories.contains_key(&dto.category_id) {
            tracing::warn!(
                "Product create rejected: category {} does not exist",
                dto.category_id
            );
            return Err(AppError::InvalidReference("Category not found".to_string()));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: dto.name,
            description: dto.description,
            sku: dto.sku,
            price: dto.price,
            sale_price: dto.sale_price,
            cost: dto.cost,
            stock_quantity: dto.stock_quantity,
            reorder_level: dto.reorder_level,
            category_id: dto.category_id,
            size: dto.size,
            color: dto.color,
            material: dto.material,
            is_active: dto.is_active,
            created_at: now,
            updated_at: now,
        };
        state.products.insert(product.id, product.clone());

        tracing::info!("Product created: id={}, sku={}", product.id, product.sku);

        Ok(product.into())
    }

    /// List products matching the filters; filters compose as a logical AND
    pub async fn list(&self, query: &ListProductsQuery) -> Vec<ProductResponseDto> {
        let state = self.store.read().await;
        state
            .products
            .values()
            .filter(|p| match &query.name {
                Some(name) => p.name.to_lowercase().contains(&name.to_lowercase()),
                None => true,
            })
            .filter(|p| match &query.sku {
                Some(sku) => p.sku.to_lowercase().contains(&sku.to_lowercase()),
                None => true,
            })
            .filter(|p| query.category_id.map_or(true, |id| p.category_id == id))
            .filter(|p| query.is_active.map_or(true, |active| p.is_active == active))
            .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
            .filter(|p| !query.low_stock.unwrap_or(false) || p.is_low_stock())
            .cloned()
            .map(Into::into)
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Result<ProductResponseDto> {
        let state = self.store.read().await;
        state
            .products
            .get(&id)
            .cloned()
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Merge the supplied fields onto an existing product and refresh
    /// `updated_at`
    ///
    /// A missing product wins over a bad category reference, and a bad
    /// reference leaves the product untouched.
    pub async fn update(&self, id: Uuid, dto: UpdateProductDto) -> Result<ProductResponseDto> {
        let mut state = self.store.write().await;
        if !state.products.contains_key(&id) {
            return Err(AppError::NotFound("Product not found".to_string()));
        }
        if let Some(category_id) = dto.category_id {
            if !state.categories.contains_key(&category_id) {
                tracing::warn!(
                    "Product update rejected: category {} does not exist",
                    category_id
                );
                return Err(AppError::InvalidReference("Category not found".to_string()));
            }
        }

        let product = state
            .products
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        if let Some(name) = dto.name {
            product.name = name;
        }
        if let Some(description) = dto.description {
            product.description = description;
        }
        if let Some(sku) = dto.sku {
            product.sku = sku;
        }
        if let Some(price) = dto.price {
            product.price = price;
        }
        if let Some(sale_price) = dto.sale_price {
            product.sale_price = sale_price;
        }
        if let Some(cost) = dto.cost {
            product.cost = cost;
        }
        if let Some(stock_quantity) = dto.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(reorder_level) = dto.reorder_level {
            product.reorder_level = reorder_level;
        }
        if let Some(category_id) = dto.category_id {
            product.category_id = category_id;
        }
        if let Some(size) = dto.size {
            product.size = size;
        }
        if let Some(color) = dto.color {
            product.color = color;
        }
        if let Some(material) = dto.material {
            product.material = material;
        }
        if let Some(is_active) = dto.is_active {
            product.is_active = is_active;
        }
        product.updated_at = Utc::now();

        tracing::info!("Product updated: id={}", id);

        Ok(product.clone().into())
    }

    /// Remove a product; nothing references products, so no guard is needed
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.store.write().await;
        state
            .products
            .remove(&id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        tracing::info!("Product deleted: id={}", id);

        Ok(())
    }
}
