pub mod state;

use self::state::create_state;
use crate::domain::a004_order::api::fetch_all_orders;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::format_vnd;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_order::OrderSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// All orders, for staff.
#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let notifications = use_notifications();

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_all_orders().await {
                Ok(orders) => {
                    state.update(|s| s.set_items(orders));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load orders: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let export = move || {
        let rows = state.with_untracked(|s| s.items.clone());
        if let Err(e) = export_to_csv(&rows, "orders.csv") {
            notifications.warning(e);
        }
    };

    load();

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" subtitle="Every order placed in the shop">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                    {icon("download")}
                    " CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}

                <div class="table-wrapper">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Code"</th>
                                <th>"Customer"</th>
                                <th>"Date"</th>
                                <th class="data-table__num">"Items"</th>
                                <th class="data-table__num">"Total"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.with(|s| s.page_rows())
                                key=|o| (o.id, o.status_id)
                                children=move |order| view! { <OrderRow order=order state=state /> }
                            />
                        </tbody>
                    </table>
                    <Show when=move || !loading.get() && state.with(|s| s.items.is_empty())>
                        <div class="table__empty">"No orders yet."</div>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.items.len()))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                    on_page_size_change=Callback::new(move |size| {
                        state.update(|s| {
                            s.page_size = size;
                            s.page = 0;
                        })
                    })
                />
            </div>
        </PageFrame>
    }
}

#[component]
fn OrderRow(order: OrderSummary, state: RwSignal<state::OrderListState>) -> impl IntoView {
    let order_id = order.id;
    let is_expanded = move || state.with(|s| s.expanded.contains(&order_id));
    let lines = StoredValue::new(order.order_details.clone());

    view! {
        <tr class="data-table__row" on:click=move |_| state.update(|s| s.toggle_expanded(order_id))>
            <td class="data-table__chevron">
                {move || if is_expanded() { icon("chevron-down") } else { icon("chevron-right") }}
            </td>
            <td>{order.code()}</td>
            <td>{order.customer_name.clone().unwrap_or_else(|| "-".to_string())}</td>
            <td>{format_datetime(&order.date)}</td>
            <td class="data-table__num">{order.item_count()}</td>
            <td class="data-table__num">{format_vnd(order.total)}</td>
            <td><StatusBadge label=order.status_name.clone() tone=order.tone() /></td>
        </tr>
        <Show when=is_expanded>
            <tr class="data-table__details">
                <td colspan="7">
                    <table class="data-table data-table--nested">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th class="data-table__num">"Quantity"</th>
                                <th class="data-table__num">"Price"</th>
                                <th class="data-table__num">"Line total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {lines
                                .get_value()
                                .into_iter()
                                .map(|line| view! {
                                    <tr>
                                        <td>{line.product.product_name.clone()}</td>
                                        <td class="data-table__num">{line.quantity}</td>
                                        <td class="data-table__num">{format_vnd(line.price)}</td>
                                        <td class="data-table__num">{format_vnd(line.line_total())}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </td>
            </tr>
        </Show>
    }
}
