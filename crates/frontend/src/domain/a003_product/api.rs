use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::{CreateOrderRequest, Product};
use contracts::domain::a004_order::OrderResponse;

use crate::shared::api_utils::{get_json, send_empty, send_json, ApiError, Verb};

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/api/categories").await
}

/// All products, or one category's.
pub async fn fetch_products(category_id: Option<i64>) -> Result<Vec<Product>, ApiError> {
    match category_id {
        Some(id) => get_json(&format!("/api/products/category/{}", id)).await,
        None => get_json("/api/products").await,
    }
}

/// Creates the order (and its invoice request) from the cart.
pub async fn create_order(request: &CreateOrderRequest) -> Result<OrderResponse, ApiError> {
    send_json(Verb::Post, "/api/orders/add", request).await
}

/// Undo of [`create_order`]; the server restores stock.
pub async fn delete_order(order_id: i64) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &format!("/api/orders/{}", order_id)).await?;
    Ok(())
}
