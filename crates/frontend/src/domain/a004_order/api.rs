use contracts::domain::a004_order::{OrderResponse, OrderSummary, UpdateOrderStatusRequest};
use contracts::domain::common::DocumentStatus;

use crate::shared::api_utils::{get_json, send_json_for_text, ApiError, Verb};

/// Admin list of every order.
pub async fn fetch_all_orders() -> Result<Vec<OrderSummary>, ApiError> {
    get_json("/api/orders/list").await
}

/// Orders placed by one user.
pub async fn fetch_user_orders(user_id: i64) -> Result<Vec<OrderResponse>, ApiError> {
    get_json(&format!("/api/orders/user/{}", user_id)).await
}

pub async fn update_order_status(order_id: i64, status: DocumentStatus) -> Result<(), ApiError> {
    let body = UpdateOrderStatusRequest {
        order_id,
        status_id: status.id(),
    };
    send_json_for_text(Verb::Put, "/api/orders/update", &body).await?;
    Ok(())
}
