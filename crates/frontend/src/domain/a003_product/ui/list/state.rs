use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::Product;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::components::table::format_number_int;
use crate::shared::export::CsvExportable;
use crate::shared::list_utils::{contains_ci, filter_list, paginate, total_pages, Searchable};

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.product_name, filter)
    }
}

impl CsvExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Category", "Price", "Stock"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.product_name.clone(),
            self.category_name.clone().unwrap_or_default(),
            format_number_int(self.price),
            self.quantity.to_string(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    /// None lists every category
    pub category_id: Option<i64>,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            products: Vec::new(),
            category_id: None,
            search: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductListState {
    pub fn filtered(&self) -> Vec<Product> {
        filter_list(self.products.clone(), &self.search)
    }

    pub fn page_rows(&self) -> Vec<Product> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.page_size)
    }

    /// Any change of category, search or page size starts over at the first page.
    pub fn set_category(&mut self, category_id: Option<i64>) {
        self.category_id = category_id;
        self.page = 0;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            product_name: name.to_string(),
            category_name: Some("Đồ uống".to_string()),
            image: None,
            price: 15000.0,
            des: None,
            quantity: 10,
        }
    }

    #[test]
    fn test_search_resets_page() {
        let mut s = ProductListState {
            products: vec![product(1, "Trà xanh"), product(2, "Cà phê"), product(3, "Trà sữa")],
            page_size: 1,
            page: 2,
            ..Default::default()
        };
        s.set_search("TRÀ".into());
        assert_eq!(s.page, 0);
        assert_eq!(s.total_count(), 2);
        assert_eq!(s.total_pages(), 2);

        s.page = 1;
        s.set_category(Some(3));
        assert_eq!(s.page, 0);
        s.page = 1;
        s.set_page_size(20);
        assert_eq!(s.page, 0);
    }

    #[test]
    fn test_csv_row() {
        let row = product(7, "Trà xanh").to_csv_row();
        assert_eq!(row, vec!["7", "Trà xanh", "Đồ uống", "15.000", "10"]);
    }
}
