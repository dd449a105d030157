use contracts::domain::a004_order::OrderSummary;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::components::table::format_number_int;
use crate::shared::date_utils::{format_datetime, parse_backend_datetime};
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{paginate, sort_list, total_pages, Sortable};

impl Sortable for OrderSummary {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
            "id" => self.id.cmp(&other.id),
            _ => parse_backend_datetime(&self.date).cmp(&parse_backend_datetime(&other.date)),
        }
    }
}

impl CsvExportable for OrderSummary {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Customer", "Date", "Items", "Total", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code(),
            self.customer_name.clone().unwrap_or_default(),
            format_datetime(&self.date),
            self.item_count().to_string(),
            format_number_int(self.total),
            self.status_name.clone(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct OrderListState {
    pub items: Vec<OrderSummary>,
    /// Rows whose line items are shown
    pub expanded: HashSet<i64>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            expanded: HashSet::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OrderListState {
    /// Replaces the rows, newest first.
    pub fn set_items(&mut self, mut items: Vec<OrderSummary>) {
        sort_list(&mut items, "date", false);
        self.items = items;
        self.expanded.clear();
        self.page = 0;
    }

    pub fn toggle_expanded(&mut self, order_id: i64) {
        if !self.expanded.remove(&order_id) {
            self.expanded.insert(order_id);
        }
    }

    pub fn page_rows(&self) -> Vec<OrderSummary> {
        paginate(&self.items, self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, date: &str) -> OrderSummary {
        OrderSummary {
            id,
            total: 1000.0 * id as f64,
            date: date.to_string(),
            status_id: 1,
            status_name: "Chờ xét duyệt".to_string(),
            customer_name: Some("An".to_string()),
            order_details: vec![],
        }
    }

    #[test]
    fn test_newest_first() {
        let mut s = OrderListState::default();
        s.set_items(vec![
            order(1, "2025-01-05T10:00:00"),
            order(2, "2025-03-01T08:00:00"),
            order(3, "2025-02-14T12:00:00"),
        ]);
        let ids: Vec<i64> = s.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_toggle_expanded() {
        let mut s = OrderListState::default();
        s.toggle_expanded(4);
        assert!(s.expanded.contains(&4));
        s.toggle_expanded(4);
        assert!(s.expanded.is_empty());
    }

    #[test]
    fn test_csv_row() {
        let row = order(42, "2025-03-01T08:00:00").to_csv_row();
        assert_eq!(row[0], "DH-00042");
        assert_eq!(row[2], "01/03/2025 08:00");
        assert_eq!(row[4], "42.000");
    }
}
