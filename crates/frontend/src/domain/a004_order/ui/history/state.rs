use contracts::domain::a004_order::OrderResponse;
use leptos::prelude::*;
use std::cmp::Ordering;

use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::components::table::format_number_int;
use crate::shared::date_utils::{format_datetime, parse_backend_datetime};
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{paginate, sort_list, total_pages, Sortable};

impl Sortable for OrderResponse {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "total" => self.total.partial_cmp(&other.total).unwrap_or(Ordering::Equal),
            _ => parse_backend_datetime(&self.date).cmp(&parse_backend_datetime(&other.date)),
        }
    }
}

impl CsvExportable for OrderResponse {
    fn headers() -> Vec<&'static str> {
        vec!["Code", "Date", "Total", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.code(),
            format_datetime(&self.date),
            format_number_int(self.total),
            self.status_name.clone(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct OrderHistoryState {
    pub items: Vec<OrderResponse>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for OrderHistoryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl OrderHistoryState {
    pub fn set_items(&mut self, mut items: Vec<OrderResponse>) {
        sort_list(&mut items, "date", false);
        self.items = items;
        self.page = 0;
    }

    pub fn page_rows(&self) -> Vec<OrderResponse> {
        paginate(&self.items, self.page, self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Sum still to be paid.
    pub fn outstanding(&self) -> f64 {
        self.items.iter().filter(|o| o.is_payable()).map(|o| o.total).sum()
    }
}

pub fn create_state() -> RwSignal<OrderHistoryState> {
    RwSignal::new(OrderHistoryState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, date: &str, status: &str) -> OrderResponse {
        OrderResponse {
            id,
            total: 50000.0,
            status_name: status.to_string(),
            date: date.to_string(),
            created_by: None,
            order_details: vec![],
        }
    }

    #[test]
    fn test_newest_first_and_outstanding() {
        let mut s = OrderHistoryState::default();
        s.set_items(vec![
            order(1, "2025-01-01", "Đã thanh toán"),
            order(2, "2025-04-01T09:30:00Z", "Chờ thanh toán"),
            order(3, "2025-02-01T09:30:00", "Chờ thanh toán"),
        ]);
        let ids: Vec<i64> = s.items.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(s.outstanding(), 100000.0);
    }
}
