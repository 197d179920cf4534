//! Catalog products feature.
//!
//! Products carry a `category_id` foreign key; creation and updates check it
//! against the category collection, and a category with referencing products
//! cannot be deleted.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
