use contracts::domain::a004_order::order_code;
use contracts::domain::a005_invoice_request::InvoiceRequest;
use contracts::domain::common::DocumentStatus;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::list_utils::{contains_ci, filter_list, paginate, total_pages, Searchable};

impl Searchable for InvoiceRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.username, filter)
            || self
                .order_id
                .map(|id| contains_ci(&order_code(id), filter))
                .unwrap_or(false)
    }
}

/// Row being edited and the status picked in its dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditingRow {
    pub request_id: i64,
    pub status: DocumentStatus,
}

#[derive(Clone, Debug)]
pub struct InvoiceRequestListState {
    pub items: Vec<InvoiceRequest>,
    pub search: String,
    /// None keeps every status
    pub status_filter: Option<DocumentStatus>,
    pub editing: Option<EditingRow>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for InvoiceRequestListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            status_filter: None,
            editing: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl InvoiceRequestListState {
    pub fn filtered(&self) -> Vec<InvoiceRequest> {
        filter_list(self.items.clone(), &self.search)
            .into_iter()
            .filter(|r| self.status_filter.is_none() || r.status() == self.status_filter)
            .collect()
    }

    pub fn page_rows(&self) -> Vec<InvoiceRequest> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.page_size)
    }

    /// Enters edit mode for a row, starting from its current status.
    pub fn begin_edit(&mut self, request_id: i64) {
        let status = self
            .items
            .iter()
            .find(|r| r.id == request_id)
            .and_then(InvoiceRequest::status)
            .unwrap_or(DocumentStatus::Pending);
        self.editing = Some(EditingRow { request_id, status });
    }

    pub fn pick_status(&mut self, status: DocumentStatus) {
        if let Some(editing) = self.editing.as_mut() {
            editing.status = status;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Applies a saved status to the local row and leaves edit mode.
    pub fn commit(&mut self, request_id: i64, status: DocumentStatus) {
        if let Some(row) = self.items.iter_mut().find(|r| r.id == request_id) {
            row.set_status(status);
        }
        self.editing = None;
    }
}

pub fn create_state() -> RwSignal<InvoiceRequestListState> {
    RwSignal::new(InvoiceRequestListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: i64, order_id: i64, user: &str, status_id: i64) -> InvoiceRequest {
        let mut r: InvoiceRequest = serde_json::from_str(&format!(r#"{{"id":{}}}"#, id)).unwrap();
        r.order_id = Some(order_id);
        r.username = user.to_string();
        if let Some(status) = DocumentStatus::from_id(status_id) {
            r.set_status(status);
        }
        r
    }

    fn state() -> InvoiceRequestListState {
        InvoiceRequestListState {
            items: vec![
                request(1, 10, "minh", 1),
                request(2, 11, "lan", 3),
                request(3, 12, "minh", 2),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_status_filter_and_search() {
        let mut s = state();
        s.status_filter = Some(DocumentStatus::Pending);
        assert_eq!(s.total_count(), 1);
        s.status_filter = None;
        s.search = "MINH".into();
        assert_eq!(s.total_count(), 2);
        s.search = "dh-00011".into();
        assert_eq!(s.filtered()[0].id, 2);
    }

    #[test]
    fn test_edit_flow_updates_row_locally() {
        let mut s = state();
        s.begin_edit(2);
        assert_eq!(s.editing.map(|e| e.status), Some(DocumentStatus::AwaitingPayment));
        s.pick_status(DocumentStatus::Paid);
        assert_eq!(s.editing.map(|e| e.status), Some(DocumentStatus::Paid));
        s.commit(2, DocumentStatus::Paid);
        assert!(s.editing.is_none());
        assert_eq!(s.items[1].status(), Some(DocumentStatus::Paid));
        assert_eq!(s.items[1].status_name, "Đã thanh toán");
    }

    #[test]
    fn test_cancel_keeps_row() {
        let mut s = state();
        s.begin_edit(1);
        s.pick_status(DocumentStatus::Rejected);
        s.cancel_edit();
        assert_eq!(s.items[0].status(), Some(DocumentStatus::Pending));
    }
}
