//! PageFrame, the root wrapper of every page rendered inside a tab.
//!
//! The root element gets `id="{entity}--{category}"` (e.g. `"a004_order--list"`)
//! and `data-page-category`, so a DOM id copied from the inspector leads straight
//! to the module.

use leptos::prelude::*;

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Charts and stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// Free-form layout (catalog with cart).
pub const PAGE_CAT_CUSTOM: &str = "custom";

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        base_class(category).to_string()
    } else {
        format!("{} {}", base_class(category), class)
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
