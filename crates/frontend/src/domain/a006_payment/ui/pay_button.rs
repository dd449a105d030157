use crate::domain::a006_payment::api::{create_payment, redirect_to_gateway};
use crate::shared::notifications::use_notifications;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Starts a VNPay checkout for an order and leaves the console for the gateway.
#[component]
pub fn PayButton(order_id: i64, total: f64) -> impl IntoView {
    let (busy, set_busy) = signal(false);
    let notifications = use_notifications();

    let pay = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        set_busy.set(true);
        spawn_local(async move {
            let result = match create_payment(order_id, total).await {
                Ok(url) => {
                    log::info!("Redirecting order {} to the payment gateway", order_id);
                    redirect_to_gateway(&url)
                }
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::error!("Payment for order {} failed: {}", order_id, e);
                notifications.error(e.user_message());
                set_busy.set(false);
            }
        });
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Primary
            disabled=Signal::derive(move || busy.get())
            on_click=pay
        >
            {move || if busy.get() { "Redirecting..." } else { "Pay" }}
        </Button>
    }
}
