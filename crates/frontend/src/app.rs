use crate::domain::a007_chat::view_model::ChatVm;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(NotificationService::new());
    provide_context(ChatVm::new());

    view! {
        <ThemeProvider>
            <AuthProvider>
                <AppRoutes />
                <NotificationHost />
            </AuthProvider>
        </ThemeProvider>
    }
}
