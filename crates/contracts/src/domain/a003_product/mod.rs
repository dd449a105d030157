use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog entry as returned by `/api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub des: Option<String>,
    #[serde(default)]
    pub quantity: i64,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i64,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Body of `POST /api/orders/add`. `items` maps product id to quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub id_status: i64,
    pub items: BTreeMap<i64, i64>,
}

impl CreateOrderRequest {
    /// New orders start as pending invoice requests (status 1).
    pub fn from_cart(cart: &[CartItem]) -> Self {
        let items = cart
            .iter()
            .map(|item| (item.product.id, item.quantity))
            .collect();
        Self {
            id_status: 1,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, quantity: i64) -> Product {
        Product {
            id,
            product_name: format!("P{}", id),
            category_name: None,
            image: None,
            price,
            des: None,
            quantity,
        }
    }

    #[test]
    fn test_create_order_payload_shape() {
        let cart = vec![
            CartItem { product: product(3, 10.0, 5), quantity: 2 },
            CartItem { product: product(1, 5.0, 5), quantity: 1 },
        ];
        let req = CreateOrderRequest::from_cart(&cart);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"idStatus":1,"items":{"1":1,"3":2}}"#);
    }

    #[test]
    fn test_line_total() {
        let item = CartItem { product: product(1, 12500.0, 9), quantity: 3 };
        assert_eq!(item.line_total(), 37500.0);
    }

    #[test]
    fn test_product_parsing_with_nulls() {
        let json = r#"{"id":7,"productName":"Pen","categoryName":null,"image":null,"price":1500,"des":null,"quantity":0}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(!p.in_stock());
        assert_eq!(p.price, 1500.0);
    }
}
