mod common;

use axum::http::StatusCode;
use bookstore_core::features::products::dtos::ProductResponseDto;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn create_requires_existing_category() {
    let server = common::server();

    let response = server
        .post("/products")
        .json(&json!({
            "name": "Tee",
            "sku": "TEE-001",
            "price": "10.00",
            "stock_quantity": 1,
            "reorder_level": 5,
            "category_id": Uuid::new_v4(),
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"detail": "Category not found"})
    );

    // the failed create must not have touched the store
    let all = server.get("/products").await.json::<Vec<ProductResponseDto>>();
    assert!(all.is_empty());
}

#[tokio::test]
async fn create_then_get_round_trips_identically() {
    let server = common::server();
    let category = common::create_category(&server, "Apparel").await;

    let response = server
        .post("/products")
        .json(&json!({
            "name": "University Sweater",
            "description": "Cotton blend sweater",
            "sku": "CU-SWEATER-001",
            "price": "45.99",
            "sale_price": "39.99",
            "cost": "25.00",
            "stock_quantity": 50,
            "reorder_level": 10,
            "category_id": category.id,
            "size": "Large",
            "color": "Navy Blue",
            "material": "80% Cotton, 20% Polyester",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created = response.json::<Value>();
    assert_eq!(created["price"], json!("45.99"));
    assert_eq!(created["sale_price"], json!("39.99"));
    assert_eq!(created["is_active"], json!(true));

    let id = created["id"].as_str().unwrap();
    let fetched = server.get(&format!("/products/{}", id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn create_rejects_malformed_payload() {
    let server = common::server();
    let category = common::create_category(&server, "Apparel").await;

    // missing required price
    let response = server
        .post("/products")
        .json(&json!({
            "name": "Tee",
            "sku": "TEE-001",
            "stock_quantity": 1,
            "reorder_level": 5,
            "category_id": category.id,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.json::<Value>();
    assert!(body["detail"].is_array());
}

#[tokio::test]
async fn list_filters_compose() {
    let server = common::server();
    let apparel = common::create_category(&server, "Apparel").await;
    let drinkware = common::create_category(&server, "Drinkware").await;

    server
        .post("/products")
        .json(&json!({
            "name": "Mug",
            "sku": "MUG-001",
            "price": "5.00",
            "stock_quantity": 2,
            "reorder_level": 10,
            "category_id": drinkware.id,
        }))
        .await;
    server
        .post("/products")
        .json(&json!({
            "name": "Hoodie",
            "sku": "HOODIE-001",
            "price": "60.00",
            "stock_quantity": 50,
            "reorder_level": 5,
            "category_id": apparel.id,
        }))
        .await;

    let low_stock = server
        .get("/products")
        .add_query_param("low_stock", "true")
        .await
        .json::<Vec<ProductResponseDto>>();
    assert_eq!(low_stock.len(), 1);
    assert_eq!(low_stock[0].name, "Mug");

    let min_price = server
        .get("/products")
        .add_query_param("min_price", "10")
        .await
        .json::<Vec<ProductResponseDto>>();
    assert_eq!(min_price.len(), 1);
    assert_eq!(min_price[0].name, "Hoodie");

    let max_price = server
        .get("/products")
        .add_query_param("max_price", "5.00")
        .await
        .json::<Vec<ProductResponseDto>>();
    assert_eq!(max_price.len(), 1);
    assert_eq!(max_price[0].name, "Mug");

    let by_sku = server
        .get("/products")
        .add_query_param("sku", "hoodie")
        .await
        .json::<Vec<ProductResponseDto>>();
    assert_eq!(by_sku.len(), 1);
    assert_eq!(by_sku[0].name, "Hoodie");

    let by_category = server
        .get("/products")
        .add_query_param("category_id", apparel.id.to_string())
        .await
        .json::<Vec<ProductResponseDto>>();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].name, "Hoodie");

    let combined = server
        .get("/products")
        .add_query_param("name", "mug")
        .add_query_param("min_price", "10")
        .await
        .json::<Vec<ProductResponseDto>>();
    assert!(combined.is_empty());
}

#[tokio::test]
async fn update_merges_and_validates_category_reference() {
    let server = common::server();
    let category = common::create_category(&server, "Apparel").await;
    let product = common::create_product(&server, "Tee", "10.00", category.id).await;

    // bad reference leaves the product untouched
    let rejected = server
        .put(&format!("/products/{}", product.id))
        .json(&json!({"category_id": Uuid::new_v4(), "name": "Renamed"}))
        .await;
    assert_eq!(rejected.status_code(), StatusCode::BAD_REQUEST);

    let unchanged = server
        .get(&format!("/products/{}", product.id))
        .await
        .json::<ProductResponseDto>();
    assert_eq!(unchanged.name, "Tee");
    assert_eq!(unchanged.category_id, category.id);

    // partial update touches only the supplied fields
    let updated = server
        .put(&format!("/products/{}", product.id))
        .json(&json!({"price": "12.50"}))
        .await
        .json::<ProductResponseDto>();
    assert_eq!(updated.price.to_string(), "12.50");
    assert_eq!(updated.sku, "TEE-001");
    assert_eq!(updated.created_at, product.created_at);
    assert!(updated.updated_at >= product.updated_at);
}

#[tokio::test]
async fn update_moves_product_between_categories() {
    let server = common::server();
    let apparel = common::create_category(&server, "Apparel").await;
    let drinkware = common::create_category(&server, "Drinkware").await;
    let product = common::create_product(&server, "Tumbler", "15.00", apparel.id).await;

    let updated = server
        .put(&format!("/products/{}", product.id))
        .json(&json!({"category_id": drinkware.id}))
        .await
        .json::<ProductResponseDto>();
    assert_eq!(updated.category_id, drinkware.id);

    // the old category is deletable once nothing references it
    let response = server.delete(&format!("/categories/{}", apparel.id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let server = common::server();

    let response = server
        .put(&format!("/products/{}", Uuid::new_v4()))
        .json(&json!({"price": "1.00"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let server = common::server();

    let response = server.delete(&format!("/products/{}", Uuid::new_v4())).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_delete_guard_scenario() {
    let server = common::server();

    // POST /categories -> 201
    let response = server
        .post("/categories")
        .json(&json!({"name": "Apparel"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let category_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    // POST /products referencing the category -> 201
    let response = server
        .post("/products")
        .json(&json!({
            "name": "Tee",
            "sku": "T1",
            "price": "10.00",
            "stock_quantity": 1,
            "reorder_level": 5,
            "category_id": category_id,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let product_id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    // DELETE /categories/{id} -> 400 while the product references it
    let response = server.delete(&format!("/categories/{}", category_id)).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let detail = response.json::<Value>()["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("1 products are using this category"));

    // DELETE /products/{id} -> 204
    let response = server.delete(&format!("/products/{}", product_id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    // DELETE /categories/{id} -> 204 now that nothing references it
    let response = server.delete(&format!("/categories/{}", category_id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&format!("/categories/{}", category_id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
