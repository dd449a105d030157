use contracts::dashboards::d400_sales_overview::{
    DateRange, RevenuePoint, SalesSummary, TopProduct, TopProductsQuery,
};

use crate::shared::api_utils::{get_json, with_query, ApiError};

pub async fn fetch_summary(range: &DateRange) -> Result<SalesSummary, ApiError> {
    get_json(&with_query("/api/orders/summary", range)).await
}

/// One point per order: its date and total.
pub async fn fetch_revenue(range: &DateRange) -> Result<Vec<RevenuePoint>, ApiError> {
    get_json(&with_query("/api/orders", range)).await
}

pub async fn fetch_top_products(query: &TopProductsQuery) -> Result<Vec<TopProduct>, ApiError> {
    get_json(&with_query("/api/orders/top-products", query)).await
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub summary: SalesSummary,
    pub revenue: Vec<RevenuePoint>,
    pub top_products: Vec<TopProduct>,
}

/// The three dashboard requests run concurrently; any failure fails the whole load.
pub async fn load_dashboard(range: DateRange) -> Result<DashboardData, ApiError> {
    let top_query = TopProductsQuery::by_revenue(range.clone());
    let (summary, revenue, top_products) = futures::future::join3(
        fetch_summary(&range),
        fetch_revenue(&range),
        fetch_top_products(&top_query),
    )
    .await;

    Ok(DashboardData {
        summary: summary?,
        revenue: revenue?,
        top_products: top_products?,
    })
}
