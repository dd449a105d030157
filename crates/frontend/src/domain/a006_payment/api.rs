use contracts::domain::a006_payment::{CreatePaymentRequest, CreatePaymentResponse};

use crate::shared::api_utils::{send_json, ApiError, Verb};

/// Asks the backend for a VNPay checkout URL.
pub async fn create_payment(order_id: i64, total: f64) -> Result<String, ApiError> {
    let request = CreatePaymentRequest::for_order(order_id, total);
    let response: CreatePaymentResponse = send_json(Verb::Post, "/api/vnpay/create-order", &request).await?;
    response
        .payment_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::Parse("payment URL missing in response".to_string()))
}

/// Sends the browser to the gateway.
pub fn redirect_to_gateway(url: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    window
        .location()
        .set_href(url)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))
}
