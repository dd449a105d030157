//! Landing page VNPay redirects to after checkout.
//!
//! A successful payment marks both the order and its invoice request as paid,
//! then returns the user to their order history.

use contracts::domain::a006_payment::{PaymentOutcome, VnpayReturn};
use contracts::domain::common::DocumentStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::domain::a004_order::api::update_order_status;
use crate::domain::a005_invoice_request::api::update_status_by_order;
use crate::shared::notifications::use_notifications;
use crate::system::auth::storage;

const ORDER_HISTORY_PATH: &str = "/?active=a004_order_history";
const REDIRECT_DELAY_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
enum ReturnState {
    Processing,
    Success(String),
    Warning(String),
    Error(String),
}

impl ReturnState {
    fn title(&self) -> &'static str {
        match self {
            ReturnState::Processing => "Processing...",
            ReturnState::Success(_) => "Payment successful!",
            ReturnState::Warning(_) => "Payment cancelled",
            ReturnState::Error(_) => "Something went wrong",
        }
    }

    fn message(&self) -> String {
        match self {
            ReturnState::Processing => "Confirming your payment, please wait...".to_string(),
            ReturnState::Success(m) | ReturnState::Warning(m) | ReturnState::Error(m) => m.clone(),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ReturnState::Processing => "payment-return__title",
            ReturnState::Success(_) => "payment-return__title payment-return__title--success",
            ReturnState::Warning(_) => "payment-return__title payment-return__title--warning",
            ReturnState::Error(_) => "payment-return__title payment-return__title--error",
        }
    }
}

/// How long the page lingers before sending the user back to their orders.
/// `None` keeps the page open so the user can read the failure.
fn redirect_delay(outcome: &PaymentOutcome) -> Option<u32> {
    match outcome {
        PaymentOutcome::Cancelled => Some(0),
        PaymentOutcome::Succeeded { .. } => Some(REDIRECT_DELAY_MS),
        PaymentOutcome::Failed { .. } => None,
    }
}

/// Marks the order and its invoice request as paid, both requests in flight at once.
async fn confirm_paid(order_id: i64) -> Result<(), String> {
    let (order, invoice) = futures::join!(
        update_order_status(order_id, DocumentStatus::Paid),
        update_status_by_order(order_id, DocumentStatus::Paid),
    );
    order
        .and(invoice)
        .map_err(|e| format!("Error while finalizing the payment: {}.", e.user_message()))
}

#[component]
pub fn PaymentReturnPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let notifications = use_notifications();
    let state = RwSignal::new(ReturnState::Processing);

    let params = query.with_untracked(|q| VnpayReturn {
        response_code: q.get("vnp_ResponseCode"),
        txn_ref: q.get("vnp_TxnRef"),
    });

    if storage::get_access_token().is_none() {
        state.set(ReturnState::Error(
            "Authentication error. Please sign in again and retry.".to_string(),
        ));
    } else {
        let outcome = params.outcome();
        let delay = redirect_delay(&outcome);
        match outcome {
            PaymentOutcome::Cancelled => {
                let message = "You cancelled the payment.";
                state.set(ReturnState::Warning(message.to_string()));
                notifications.warning(message);
                if let Some(ms) = delay {
                    let navigate = navigate.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(ms).await;
                        navigate(ORDER_HISTORY_PATH, Default::default());
                    });
                }
            }
            PaymentOutcome::Failed { code } => {
                log::warn!("VNPay returned code {}", code);
                state.set(ReturnState::Error(format!(
                    "Transaction failed. Code: {}. Please try again.",
                    code
                )));
            }
            PaymentOutcome::Succeeded { order_id } => {
                let navigate = navigate.clone();
                spawn_local(async move {
                    match confirm_paid(order_id).await {
                        Ok(()) => {
                            state.set(ReturnState::Success(format!(
                                "Payment for order #{} succeeded. Everything has been updated.",
                                order_id
                            )));
                            if let Some(ms) = delay {
                                TimeoutFuture::new(ms).await;
                                navigate(ORDER_HISTORY_PATH, Default::default());
                            }
                        }
                        Err(msg) => {
                            log::error!("{}", msg);
                            state.set(ReturnState::Error(msg));
                        }
                    }
                });
            }
        }
    }

    let back = move |_| navigate(ORDER_HISTORY_PATH, Default::default());

    view! {
        <div class="payment-return">
            <div class="payment-return__card">
                <h1 class=move || state.with(|s| s.class())>{move || state.with(|s| s.title())}</h1>
                <p>{move || state.with(|s| s.message())}</p>
                <Show when=move || state.with(|s| *s != ReturnState::Processing)>
                    <button class="btn-primary" on:click=back.clone()>
                        "Back to my orders"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_payment_returns_to_orders_at_once() {
        assert_eq!(redirect_delay(&PaymentOutcome::Cancelled), Some(0));
        assert_eq!(
            redirect_delay(&PaymentOutcome::Succeeded { order_id: 12 }),
            Some(REDIRECT_DELAY_MS)
        );
        assert_eq!(redirect_delay(&PaymentOutcome::Failed { code: "24".into() }), None);
    }

    #[test]
    fn test_return_state_text() {
        let state = ReturnState::Warning("You cancelled the payment.".into());
        assert_eq!(state.title(), "Payment cancelled");
        assert_eq!(state.message(), "You cancelled the payment.");
        assert!(state.class().ends_with("--warning"));
    }
}
