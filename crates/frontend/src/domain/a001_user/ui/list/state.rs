use contracts::domain::a001_user::{User, UserStatusFilter};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::DEFAULT_PAGE_SIZE;
use crate::shared::list_utils::{contains_ci, filter_list, paginate, total_pages, Searchable};

/// Value of the role filter that keeps every role.
pub const ALL_ROLES: &str = "All";

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter) || contains_ci(&self.email, filter)
    }
}

#[derive(Clone, Debug)]
pub struct UserListState {
    pub items: Vec<User>,
    pub search: String,
    /// `ALL_ROLES` or an upper-cased role name
    pub role_filter: String,
    pub status_filter: UserStatusFilter,
    pub page: usize,
    pub page_size: usize,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            role_filter: ALL_ROLES.to_string(),
            status_filter: UserStatusFilter::All,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UserListState {
    pub fn filtered(&self) -> Vec<User> {
        filter_list(self.items.clone(), &self.search)
            .into_iter()
            .filter(|u| self.role_filter == ALL_ROLES || u.role_key() == self.role_filter)
            .filter(|u| self.status_filter.accepts(u.active))
            .collect()
    }

    pub fn page_rows(&self) -> Vec<User> {
        paginate(&self.filtered(), self.page, self.page_size)
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.page_size)
    }

    /// Distinct role keys present in the list, sorted.
    pub fn role_options(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.items.iter().map(User::role_key).collect();
        roles.sort();
        roles.dedup();
        roles
    }

    /// In-place update after a successful ban/unban.
    pub fn set_active(&mut self, user_id: i64, active: bool) {
        if let Some(user) = self.items.iter_mut().find(|u| u.id == user_id) {
            user.active = active;
        }
    }
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::RoleRef;

    fn user(id: i64, name: &str, role: &str, active: bool) -> User {
        User {
            id,
            email: format!("{}@shop.vn", name.to_lowercase()),
            name: name.to_string(),
            role: RoleRef { id: 0, role_name: role.to_string() },
            active,
        }
    }

    fn state() -> UserListState {
        UserListState {
            items: vec![
                user(1, "Alice", "admin", true),
                user(2, "Bob", "customer", false),
                user(3, "Carol", "Customer", true),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_email() {
        let mut s = state();
        s.search = "BOB".into();
        assert_eq!(s.filtered().len(), 1);
        s.search = "@shop.vn".into();
        assert_eq!(s.filtered().len(), 3);
    }

    #[test]
    fn test_role_and_status_filters_combine() {
        let mut s = state();
        s.role_filter = "CUSTOMER".into();
        assert_eq!(s.filtered().len(), 2);
        s.status_filter = UserStatusFilter::Active;
        let rows = s.filtered();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Carol");
    }

    #[test]
    fn test_role_options_are_distinct() {
        assert_eq!(state().role_options(), vec!["ADMIN".to_string(), "CUSTOMER".to_string()]);
    }

    #[test]
    fn test_set_active_updates_row() {
        let mut s = state();
        s.set_active(2, true);
        assert!(s.items.iter().all(|u| u.active));
    }

    #[test]
    fn test_pagination() {
        let mut s = state();
        s.page_size = 2;
        assert_eq!(s.total_pages(), 2);
        s.page = 1;
        assert_eq!(s.page_rows().len(), 1);
    }
}
