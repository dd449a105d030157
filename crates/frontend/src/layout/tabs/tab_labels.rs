//! Tab keys and their titles. `?active=` carries the key.

pub const DASHBOARD: &str = "d400_sales_overview";
pub const USERS: &str = "a001_user";
pub const PRODUCTS: &str = "a003_product";
pub const ORDERS: &str = "a004_order_list";
pub const ORDER_HISTORY: &str = "a004_order_history";
pub const INVOICE_REQUESTS: &str = "a005_invoice_request";

/// Title for a tab key; unknown keys are shown as is.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        DASHBOARD => "Dashboard",
        USERS => "Users",
        PRODUCTS => "Products",
        ORDERS => "Orders",
        ORDER_HISTORY => "My orders",
        INVOICE_REQUESTS => "Invoice requests",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key(ORDER_HISTORY), "My orders");
        assert_eq!(tab_label_for_key("something_else"), "something_else");
    }
}
