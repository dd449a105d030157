use contracts::domain::a005_invoice_request::{InvoiceRequest, StatusAction, UpdateStatusRequest};
use contracts::domain::common::DocumentStatus;

use crate::shared::api_utils::{get_json, send_empty, send_json_for_text, ApiError, Verb};

pub async fn fetch_invoice_requests() -> Result<Vec<InvoiceRequest>, ApiError> {
    get_json("/api/invoice-requests").await
}

/// Runs the server side of moving a request to `target`.
///
/// Returns the server's confirmation text; `LocalOnly` targets make no call.
pub async fn apply_status(request_id: i64, target: DocumentStatus) -> Result<Option<String>, ApiError> {
    match StatusAction::for_target(target).path_suffix() {
        Some(suffix) => {
            let path = format!("/api/invoice-requests/{}/{}", request_id, suffix);
            send_empty(Verb::Post, &path).await.map(Some)
        }
        None => Ok(None),
    }
}

/// Sets the status of the request attached to an order (used after payment).
pub async fn update_status_by_order(order_id: i64, status: DocumentStatus) -> Result<(), ApiError> {
    let path = format!("/api/invoice-requests/by-order/{}/status", order_id);
    let body = UpdateStatusRequest {
        status_id: status.id(),
    };
    send_json_for_text(Verb::Put, &path, &body).await?;
    Ok(())
}
