use std::sync::Arc;

use axum_test::TestServer;
use bookstore_core::app::api_router;
use bookstore_core::features::categories::dtos::CategoryResponseDto;
use bookstore_core::features::products::dtos::ProductResponseDto;
use bookstore_core::modules::store::CatalogStore;
use serde_json::json;
use uuid::Uuid;

pub fn server() -> TestServer {
    let store = Arc::new(CatalogStore::new());
    TestServer::new(api_router(store, "127.0.0.1:8000".to_string())).unwrap()
}

pub async fn create_category(server: &TestServer, name: &str) -> CategoryResponseDto {
    let response = server
        .post("/categories")
        .json(&json!({
            "name": name,
            "description": format!("{} items", name),
        }))
        .await;
    response.json::<CategoryResponseDto>()
}

pub async fn create_product(
    server: &TestServer,
    name: &str,
    price: &str,
    category_id: Uuid,
) -> ProductResponseDto {
    let response = server
        .post("/products")
        .json(&json!({
            "name": name,
            "sku": format!("{}-001", name.to_uppercase()),
            "price": price,
            "stock_quantity": 50,
            "reorder_level": 10,
            "category_id": category_id,
        }))
        .await;
    response.json::<ProductResponseDto>()
}
