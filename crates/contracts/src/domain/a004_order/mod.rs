use crate::domain::common::{null_as_empty, DocumentStatus, StatusTone};
use serde::{Deserialize, Serialize};

/// Formats an order id as the human-facing code, e.g. `DH-00042`.
pub fn order_code(id: i64) -> String {
    format!("DH-{:05}", id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Line of an order in the admin list (`/api/orders/list`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub quantity: i64,
    pub price: f64,
    pub product: ProductRef,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Admin view of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i64,
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    pub status_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_name: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub order_details: Vec<OrderLine>,
}

impl OrderSummary {
    pub fn code(&self) -> String {
        order_code(self.id)
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::for_status_id(self.status_id)
    }

    pub fn item_count(&self) -> i64 {
        self.order_details.iter().map(|l| l.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBy {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
}

/// Line of an order in the customer history (`/api/orders/user/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(default)]
    pub id: Option<i64>,
    pub quantity: i64,
    pub price: f64,
    #[serde(default)]
    pub subtotal: Option<f64>,
    pub product: ProductRef,
}

impl OrderDetail {
    /// Backend subtotal when present, otherwise price × quantity.
    pub fn amount(&self) -> f64 {
        self.subtotal
            .unwrap_or_else(|| self.price * self.quantity as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,
}

impl OrderResponse {
    pub fn code(&self) -> String {
        order_code(self.id)
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::for_status_name(&self.status_name)
    }

    /// Only orders waiting for payment can be sent to the gateway.
    pub fn is_payable(&self) -> bool {
        DocumentStatus::from_name(&self.status_name) == Some(DocumentStatus::AwaitingPayment)
    }
}

/// Body of `PUT /api/orders/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: i64,
    pub status_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_code() {
        assert_eq!(order_code(42), "DH-00042");
        assert_eq!(order_code(123456), "DH-123456");
    }

    #[test]
    fn test_order_summary_parsing() {
        let json = r#"{
            "id": 9, "total": 250000, "date": "2025-05-02T10:15:00",
            "statusId": 3, "statusName": "Chờ thanh toán", "customerName": "An",
            "orderDetails": [
                {"quantity": 2, "price": 100000, "product": {"productName": "Tea"}},
                {"quantity": 1, "price": 50000, "product": {"productName": "Cup"}}
            ]
        }"#;
        let order: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(order.code(), "DH-00009");
        assert_eq!(order.tone(), StatusTone::Info);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.order_details[0].line_total(), 200000.0);
    }

    #[test]
    fn test_null_status_and_date_parse_as_empty() {
        let json = r#"[{"id":7,"total":120000,"statusName":null,"date":null,"createdBy":null,"orderDetails":[]}]"#;
        let orders: Vec<OrderResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(orders[0].status_name, "");
        assert_eq!(orders[0].date, "");
        assert!(!orders[0].is_payable());
        assert_eq!(orders[0].tone(), StatusTone::for_status_name(""));

        let json = r#"{"id":8,"total":5,"date":null,"statusId":1,"statusName":null}"#;
        let summary: OrderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.date, "");
        assert_eq!(summary.status_name, "");
        assert!(summary.order_details.is_empty());
    }

    #[test]
    fn test_payable_only_when_awaiting_payment() {
        let mut order = OrderResponse {
            id: 1,
            total: 10.0,
            status_name: "Chờ thanh toán".into(),
            date: "2025-01-01T00:00:00Z".into(),
            created_by: None,
            order_details: vec![],
        };
        assert!(order.is_payable());
        order.status_name = "Đã thanh toán".into();
        assert!(!order.is_payable());
        order.status_name = "Chờ xét duyệt".into();
        assert!(!order.is_payable());
    }

    #[test]
    fn test_detail_amount_falls_back_to_price() {
        let line = OrderDetail {
            id: None,
            quantity: 4,
            price: 2.5,
            subtotal: None,
            product: ProductRef { id: None, product_name: "x".into(), image: None },
        };
        assert_eq!(line.amount(), 10.0);
    }

    #[test]
    fn test_update_request_body() {
        let body = UpdateOrderStatusRequest { order_id: 5, status_id: 4 };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"orderId":5,"statusId":4}"#
        );
    }
}
