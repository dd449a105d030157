use serde::{Deserialize, Serialize};

/// Response of `/api/orders/summary`. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub average_order_value: f64,
    #[serde(default)]
    pub new_customers: i64,
    #[serde(default)]
    pub comparison: Option<Comparison>,
}

/// Change relative to the previous period, in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    #[serde(default)]
    pub revenue_comparison: Option<f64>,
    #[serde(default)]
    pub orders_comparison: Option<f64>,
}

/// One order in the revenue series of `/api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProductRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product: TopProductRef,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub total_revenue: f64,
}

/// Date range filter. Sent only when both ends are set (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DateRange {
    pub fn new(start: &str, end: &str) -> Self {
        let clean = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        match (clean(start), clean(end)) {
            (Some(start), Some(end)) => Self {
                start: Some(start),
                end: Some(end),
            },
            _ => Self::default(),
        }
    }

    pub fn is_set(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopProductsSort {
    Revenue,
    Quantity,
}

/// Query of `/api/orders/top-products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProductsQuery {
    pub sort_by: TopProductsSort,
    pub limit: u32,
    #[serde(flatten)]
    pub range: DateRange,
}

impl TopProductsQuery {
    pub fn by_revenue(range: DateRange) -> Self {
        Self {
            sort_by: TopProductsSort::Revenue,
            limit: 5,
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_requires_both_ends() {
        assert!(DateRange::new("2025-01-01", "2025-02-01").is_set());
        assert_eq!(DateRange::new("2025-01-01", ""), DateRange::default());
        assert_eq!(DateRange::new(" ", "2025-02-01"), DateRange::default());
    }

    #[test]
    fn test_summary_with_missing_fields() {
        let json = r#"{"totalRevenue": 1200000, "totalOrders": 4}"#;
        let summary: SalesSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_revenue, 1_200_000.0);
        assert_eq!(summary.total_orders, 4);
        assert_eq!(summary.new_customers, 0);
        assert!(summary.comparison.is_none());
    }

    #[test]
    fn test_top_product_parsing() {
        let json = r#"[{"product":{"productName":"Tea"},"totalQuantity":10,"totalRevenue":500000}]"#;
        let items: Vec<TopProduct> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].product.product_name, "Tea");
        assert_eq!(items[0].product.id, None);
    }
}
