use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Stored representation of a product
///
/// `sku` is not required to be unique and prices are not range-checked;
/// both match the permissive input contract of the HTTP surface.
#[derive(Debug, Clone)]
pub struct Product {
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

impl Product {
    /// Stock at or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.reorder_level
    }
}
