use crate::shared::components::table::format_vnd;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::a004_order::OrderResponse;
use leptos::prelude::*;

/// Line items of one order, shown in a modal from the order history.
#[component]
pub fn OrderDetails(order: OrderResponse, on_close: Callback<()>) -> impl IntoView {
    let customer = order
        .created_by
        .as_ref()
        .map(|c| c.username.clone())
        .unwrap_or_default();

    view! {
        <div class="order-details">
            <div class="modal-header">
                <h2 class="modal-title">{format!("Order {}", order.code())}</h2>
                <button class="modal-close" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <div class="order-details__meta">
                <div>"Date: " {format_datetime(&order.date)}</div>
                {(!customer.is_empty()).then(|| view! { <div>"Customer: " {customer}</div> })}
                <div>"Status: " <StatusBadge label=order.status_name.clone() tone=order.tone() /></div>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th class="data-table__num">"Quantity"</th>
                        <th class="data-table__num">"Price"</th>
                        <th class="data-table__num">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {order
                        .order_details
                        .iter()
                        .map(|line| view! {
                            <tr>
                                <td>{line.product.product_name.clone()}</td>
                                <td class="data-table__num">{line.quantity}</td>
                                <td class="data-table__num">{format_vnd(line.price)}</td>
                                <td class="data-table__num">{format_vnd(line.amount())}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3">"Total"</td>
                        <td class="data-table__num"><strong>{format_vnd(order.total)}</strong></td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
