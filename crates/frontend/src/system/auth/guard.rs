use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders children for a signed-in user, otherwise redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for the listed roles.
#[component]
pub fn RequireRole(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state.get().role().map(|r| roles.contains(&r)).unwrap_or(false)
            }
            fallback=|| {
                view! {
                    <div class="access-denied">"You do not have permission to view this page."</div>
                }
            }
        >
            {children()}
        </Show>
    }
}
