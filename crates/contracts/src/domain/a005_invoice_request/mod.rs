use crate::domain::common::DocumentStatus;
use serde::{Deserialize, Serialize};

/// Invoice request as shown in the approval table.
///
/// The backend currently returns a flat record
/// (`{id, orderId, username, createdAt, statusName}`), older builds nest
/// `user`, `order` and `status`. Both shapes deserialize into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawInvoiceRequest")]
pub struct InvoiceRequest {
    pub id: i64,
    pub order_id: Option<i64>,
    pub username: String,
    pub created_at: Option<String>,
    pub status_id: Option<i64>,
    pub status_name: String,
}

impl InvoiceRequest {
    /// Resolved status: by id when known, otherwise by name.
    pub fn status(&self) -> Option<DocumentStatus> {
        self.status_id
            .and_then(DocumentStatus::from_id)
            .or_else(|| DocumentStatus::from_name(&self.status_name))
    }

    pub fn set_status(&mut self, status: DocumentStatus) {
        self.status_id = Some(status.id());
        self.status_name = status.label().to_string();
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
struct RawOrder {
    id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatus {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    status_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInvoiceRequest {
    id: i64,
    #[serde(default)]
    order_id: Option<i64>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    status_id: Option<i64>,
    #[serde(default)]
    status_name: Option<String>,
    #[serde(default)]
    user: Option<RawUser>,
    #[serde(default)]
    order: Option<RawOrder>,
    #[serde(default)]
    status: Option<RawStatus>,
}

impl From<RawInvoiceRequest> for InvoiceRequest {
    fn from(raw: RawInvoiceRequest) -> Self {
        let username = raw
            .username
            .or_else(|| {
                raw.user
                    .and_then(|u| u.username.or(u.name).or(u.email))
            })
            .unwrap_or_default();
        let (nested_status_id, nested_status_name) = match raw.status {
            Some(s) => (s.id, s.status_name.or(s.name)),
            None => (None, None),
        };
        Self {
            id: raw.id,
            order_id: raw.order_id.or(raw.order.map(|o| o.id)),
            username,
            created_at: raw.created_at,
            status_id: raw.status_id.or(nested_status_id),
            status_name: raw
                .status_name
                .or(nested_status_name)
                .unwrap_or_default(),
        }
    }
}

/// What saving a new status in the approval table does on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// `POST /api/invoice-requests/{id}/accept`
    Accept,
    /// `POST /api/invoice-requests/{id}/reject`
    Reject,
    /// No endpoint exists for moving back to pending; the row is updated locally.
    LocalOnly,
}

impl StatusAction {
    pub fn for_target(target: DocumentStatus) -> Self {
        match target {
            DocumentStatus::Rejected => StatusAction::Reject,
            DocumentStatus::AwaitingPayment | DocumentStatus::Paid => StatusAction::Accept,
            DocumentStatus::Pending => StatusAction::LocalOnly,
        }
    }

    pub fn path_suffix(&self) -> Option<&'static str> {
        match self {
            StatusAction::Accept => Some("accept"),
            StatusAction::Reject => Some("reject"),
            StatusAction::LocalOnly => None,
        }
    }
}

/// Body of `PUT /api/invoice-requests/{id}/status` and `/by-order/{orderId}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_shape() {
        let json = r#"{"id":3,"orderId":12,"username":"minh","createdAt":"2025-03-01T08:00:00","statusName":"Chờ xét duyệt"}"#;
        let req: InvoiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.order_id, Some(12));
        assert_eq!(req.username, "minh");
        assert_eq!(req.status(), Some(DocumentStatus::Pending));
    }

    #[test]
    fn test_nested_shape() {
        let json = r#"{
            "id": 4,
            "user": {"username": "lan"},
            "order": {"id": 77},
            "status": {"id": 3, "statusName": "Chờ thanh toán"},
            "createdAt": "2025-03-02T09:00:00"
        }"#;
        let req: InvoiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.order_id, Some(77));
        assert_eq!(req.username, "lan");
        assert_eq!(req.status(), Some(DocumentStatus::AwaitingPayment));
    }

    #[test]
    fn test_status_id_wins_over_name() {
        let json = r#"{"id":5,"statusId":4,"statusName":"Từ chối"}"#;
        let req: InvoiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status(), Some(DocumentStatus::Paid));
    }

    #[test]
    fn test_set_status_updates_label() {
        let mut req: InvoiceRequest = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(req.status(), None);
        req.set_status(DocumentStatus::Rejected);
        assert_eq!(req.status_name, "Từ chối");
        assert_eq!(req.status(), Some(DocumentStatus::Rejected));
    }

    #[test]
    fn test_actions() {
        assert_eq!(StatusAction::for_target(DocumentStatus::Rejected), StatusAction::Reject);
        assert_eq!(StatusAction::for_target(DocumentStatus::AwaitingPayment), StatusAction::Accept);
        assert_eq!(StatusAction::for_target(DocumentStatus::Paid), StatusAction::Accept);
        assert_eq!(StatusAction::for_target(DocumentStatus::Pending), StatusAction::LocalOnly);
        assert_eq!(StatusAction::LocalOnly.path_suffix(), None);
    }
}
