use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored representation of a category
///
/// `id` and `created_at` are assigned once at creation; `updated_at` is
/// refreshed on every successful mutation.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
