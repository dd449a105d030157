//! Sidebar navigation. Items depend on the signed-in user's role.

use crate::domain::a007_chat::view_model::ChatVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::*;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::auth::Role;
use leptos::prelude::*;

/// What a menu entry does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTarget {
    Tab(&'static str),
    Chat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub target: MenuTarget,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn tab(key: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { target: MenuTarget::Tab(key), label, icon }
}

const MENU_DASHBOARD: MenuItem = tab(DASHBOARD, "Dashboard", "dashboard");
const MENU_USERS: MenuItem = tab(USERS, "Users", "users");
const MENU_ORDERS: MenuItem = tab(ORDERS, "Orders", "orders");
const MENU_PRODUCTS: MenuItem = tab(PRODUCTS, "Products", "products");
const MENU_HISTORY: MenuItem = tab(ORDER_HISTORY, "My orders", "history");
const MENU_INVOICES: MenuItem = tab(INVOICE_REQUESTS, "Invoice requests", "invoices");
const MENU_CHAT: MenuItem = MenuItem { target: MenuTarget::Chat, label: "Support chat", icon: "chat" };

/// Menu for a role. Signed-out sessions get the customer menu; the shell is
/// behind `RequireAuth` anyway.
pub fn visible_menu(role: Option<Role>) -> Vec<MenuItem> {
    match role {
        Some(Role::Admin) => vec![
            MENU_DASHBOARD,
            MENU_USERS,
            MENU_ORDERS,
            MENU_PRODUCTS,
            MENU_HISTORY,
            MENU_INVOICES,
            MENU_CHAT,
        ],
        Some(Role::Accountant) => vec![MENU_DASHBOARD, MENU_ORDERS, MENU_INVOICES, MENU_CHAT],
        Some(Role::SalesRep) => vec![MENU_PRODUCTS, MENU_HISTORY, MENU_INVOICES, MENU_CHAT],
        Some(Role::Customer) | None => vec![MENU_PRODUCTS, MENU_HISTORY, MENU_CHAT],
    }
}

/// Tab a freshly signed-in user lands on.
pub fn home_tab(role: Option<Role>) -> &'static str {
    visible_menu(role)
        .into_iter()
        .find_map(|item| match item.target {
            MenuTarget::Tab(key) => Some(key),
            MenuTarget::Chat => None,
        })
        .unwrap_or(PRODUCTS)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let chat = use_context::<ChatVm>().expect("ChatVm context not found");
    let (auth_state, _) = use_auth();

    // Open the role's home tab when nothing came from the URL.
    Effect::new(move |_| {
        let role = auth_state.with(|s| s.role());
        if ctx.active.with_untracked(|a| a.is_none()) && auth_state.with_untracked(|s| s.is_authenticated()) {
            let key = home_tab(role);
            ctx.open_tab(key, tab_label_for_key(key));
        }
    });

    view! {
        <div class="app-sidebar__content">
            {move || {
                visible_menu(auth_state.with(|s| s.role()))
                    .into_iter()
                    .map(|item| {
                        let is_active = move || match item.target {
                            MenuTarget::Tab(key) => ctx.active.with(|a| a.as_deref() == Some(key)),
                            MenuTarget::Chat => chat.is_open.get(),
                        };
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=is_active
                                on:click=move |_| match item.target {
                                    MenuTarget::Tab(key) => ctx.open_tab(key, item.label),
                                    MenuTarget::Chat => chat.is_open.set(true),
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_keys(role: Option<Role>) -> Vec<&'static str> {
        visible_menu(role)
            .into_iter()
            .filter_map(|i| match i.target {
                MenuTarget::Tab(k) => Some(k),
                MenuTarget::Chat => None,
            })
            .collect()
    }

    #[test]
    fn test_admin_sees_everything() {
        let keys = tab_keys(Some(Role::Admin));
        for key in [DASHBOARD, USERS, ORDERS, PRODUCTS, ORDER_HISTORY, INVOICE_REQUESTS] {
            assert!(keys.contains(&key), "missing {}", key);
        }
    }

    #[test]
    fn test_role_menus() {
        assert_eq!(tab_keys(Some(Role::Accountant)), vec![DASHBOARD, ORDERS, INVOICE_REQUESTS]);
        assert_eq!(tab_keys(Some(Role::SalesRep)), vec![PRODUCTS, ORDER_HISTORY, INVOICE_REQUESTS]);
        assert_eq!(tab_keys(Some(Role::Customer)), vec![PRODUCTS, ORDER_HISTORY]);
        assert!(visible_menu(None).contains(&MENU_CHAT));
    }

    #[test]
    fn test_home_tab() {
        assert_eq!(home_tab(Some(Role::Admin)), DASHBOARD);
        assert_eq!(home_tab(Some(Role::Customer)), PRODUCTS);
    }
}
