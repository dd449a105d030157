use super::tabs::TabStrip;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let has_tabs = move || ctx.opened.with(|tabs| !tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <Show when=has_tabs>
                <TabStrip />
            </Show>
            <Show when=move || !has_tabs()>
                <div class="app-tabs__empty">
                    {icon("dashboard")}
                    <p>"Pick a section in the sidebar to get started."</p>
                </div>
            </Show>
            {children()}
        </div>
    }
}
