//! Tab key to page component. Every tab key is handled here.

use super::tab_labels::*;
use crate::dashboards::d400_sales_overview::ui::SalesOverviewDashboard;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a003_product::ui::list::ProductCatalog;
use crate::domain::a004_order::ui::history::OrderHistory;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_invoice_request::ui::list::InvoiceRequestList;
use contracts::system::auth::Role;
use crate::system::auth::guard::RequireRole;
use leptos::logging::log;
use leptos::prelude::*;

const STAFF: &[Role] = &[Role::Admin, Role::Accountant];
const ADMIN: &[Role] = &[Role::Admin];
const INVOICE_ROLES: &[Role] = &[Role::Admin, Role::Accountant, Role::SalesRep];

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        DASHBOARD => view! { <RequireRole roles=STAFF><SalesOverviewDashboard /></RequireRole> }.into_any(),
        USERS => view! { <RequireRole roles=ADMIN><UserList /></RequireRole> }.into_any(),
        PRODUCTS => view! { <ProductCatalog /> }.into_any(),
        ORDERS => view! { <RequireRole roles=STAFF><OrderList /></RequireRole> }.into_any(),
        ORDER_HISTORY => view! { <OrderHistory /> }.into_any(),
        INVOICE_REQUESTS => {
            view! { <RequireRole roles=INVOICE_ROLES><InvoiceRequestList /></RequireRole> }.into_any()
        }
        _ => {
            log!("Unknown tab key: '{}'", key);
            view! { <div class="placeholder">{format!("Unknown page: {}", key)}</div> }.into_any()
        }
    }
}
