use crate::app_shell::AppShell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::payment_return::PaymentReturnPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="placeholder">"Page not found."</div> }>
                <Route path=path!("/") view=AppShell />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/payment/vnpay-return") view=PaymentReturnPage />
            </Routes>
        </Router>
    }
}
