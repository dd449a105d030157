//! Signed-in part of the console: shell, open tabs and the overlays that float
//! above them (modals and the support chat).

use crate::domain::a007_chat::ui::ChatWidget;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;

/// Initializes `?active=` sync once, then renders every open tab.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }
                .into_any()
            }
        />
        <ModalHost />
        <ChatWidget />
    }
}

/// Auth gate for `/`.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout />
        </RequireAuth>
    }
}
