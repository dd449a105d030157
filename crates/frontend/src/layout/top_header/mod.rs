//! Top bar: brand, sidebar toggle, theme switch, current user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found");
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        log::info!("Signing out");
        modal_stack.clear();
        ctx.reset();
        do_logout(set_auth_state);
        navigate("/login", Default::default());
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Invoice Console"</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />

                <div class="top-header__user">
                    {icon("users")}
                    {move || {
                        auth_state
                            .get()
                            .user_info
                            .map(|u| {
                                let role = u.role().label();
                                view! {
                                    <span class="top-header__user-name">{u.display_name().to_string()}</span>
                                    <span class="top-header__user-role">{role}</span>
                                }
                                    .into_any()
                            })
                            .unwrap_or_else(|| view! { <span>"Guest"</span> }.into_any())
                    }}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
