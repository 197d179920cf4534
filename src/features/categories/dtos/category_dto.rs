use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::patch::double_option;

fn default_true() -> bool {
    true
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category name (e.g. Apparel, Drinkware, Accessories)
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    pub description: Option<String>,

    /// Whether this category is currently active for new products
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request DTO for partially updating a category
///
/// Absent fields leave the stored value untouched. `description` set to an
/// explicit JSON null clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    pub is_active: Option<bool>,
}

/// Query params for listing categories
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListCategoriesQuery {
    /// Case-insensitive substring match on the category name
    pub name: Option<String>,

    /// Filter by active status
    pub is_active: Option<bool>,
}

/// Response DTO for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
