use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::Product;
use crate::shared::patch::double_option;

fn default_true() -> bool {
    true
}

/// Request DTO for creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    pub description: Option<String>,

    /// Stock Keeping Unit; uniqueness is not enforced
    pub sku: String,

    /// Regular price (exact decimal, e.g. "45.99")
    pub price: Decimal,

    /// Sale price if the product is on sale
    pub sale_price: Option<Decimal>,

    /// Cost price for inventory management
    pub cost: Option<Decimal>,

    pub stock_quantity: i32,

    /// Minimum stock level before reordering
    pub reorder_level: i32,

    /// ID of the category this product belongs to; must reference an
    /// existing category
    pub category_id: Uuid,

    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,

    /// Whether this product is currently available for sale
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request DTO for partially updating a product
///
/// Absent fields leave the stored value untouched; nullable fields set to an
/// explicit JSON null clear the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    pub sku: Option<String>,

    pub price: Option<Decimal>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Decimal>)]
    pub sale_price: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Decimal>)]
    pub cost: Option<Option<Decimal>>,

    pub stock_quantity: Option<i32>,

    pub reorder_level: Option<i32>,

    /// Must reference an existing category when supplied
    pub category_id: Option<Uuid>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub size: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub color: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub material: Option<Option<String>>,

    pub is_active: Option<bool>,
}

/// Query params for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListProductsQuery {
    /// Case-insensitive substring match on the product name
    pub name: Option<String>,

    /// Case-insensitive substring match on the SKU
    pub sku: Option<String>,

    /// Filter by category
    pub category_id: Option<Uuid>,

    /// Filter by active status
    pub is_active: Option<bool>,

    /// Inclusive lower bound on the regular price
    pub min_price: Option<Decimal>,

    /// Inclusive upper bound on the regular price
    pub max_price: Option<Decimal>,

    /// When true, only products with stock at or below the reorder level
    pub low_stock: Option<bool>,
}

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sku: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub cost: Option<Decimal>,
    pub stock_quantity: i32,
    pub reorder_level: i32,
    pub category_id: Uuid,
    pub size: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            sku: p.sku,
            price: p.price,
            sale_price: p.sale_price,
            cost: p.cost,
            stock_quantity: p.stock_quantity,
            reorder_level: p.reorder_level,
            category_id: p.category_id,
            size: p.size,
            color: p.color,
            material: p.material,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
