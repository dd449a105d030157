pub mod state;

use self::state::create_state;
use super::details::OrderDetails;
use crate::domain::a004_order::api::fetch_user_orders;
use crate::domain::a006_payment::ui::PayButton;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::format_vnd;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use contracts::domain::a004_order::OrderResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Orders of the signed-in user, with payment of unpaid ones.
#[component]
pub fn OrderHistory() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (auth_state, _) = use_auth();
    let modal_stack = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let notifications = use_notifications();

    let load = move || {
        let Some(user_id) = auth_state.with_untracked(|s| s.user_info.as_ref().map(|u| u.id)) else {
            set_error.set(Some("Please sign in to see your orders.".to_string()));
            return;
        };
        spawn_local(async move {
            set_loading.set(true);
            match fetch_user_orders(user_id).await {
                Ok(orders) => {
                    state.update(|s| s.set_items(orders));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load order history: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let open_details = move |order: OrderResponse| {
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            Some("order-details-modal".to_string()),
            move |handle| {
                let on_close = Callback::new(move |_| handle.close());
                view! { <OrderDetails order=order.clone() on_close=on_close /> }.into_any()
            },
        );
    };

    let export = move || {
        let rows = state.with_untracked(|s| s.items.clone());
        if let Err(e) = export_to_csv(&rows, "my-orders.csv") {
            notifications.warning(e);
        }
    };

    load();

    view! {
        <PageFrame page_id="a004_order--history" category=PAGE_CAT_LIST>
            <PageHeader
                title="My orders"
                subtitle=Signal::derive(move || {
                    let due = state.with(|s| s.outstanding());
                    (due > 0.0).then(|| format!("Awaiting payment: {}", format_vnd(due)))
                })
            >
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
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Code"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.page_rows())
                                key=|o| (o.id, o.status_name.clone())
                                children=move |order| {
                                    let for_details = order.clone();
                                    let code = order.code();
                                    let date = format_datetime(&order.date);
                                    let total = format_vnd(order.total);
                                    let status_name = order.status_name.clone();
                                    let tone = order.tone();
                                    let pay = order.is_payable().then(|| view! {
                                        <PayButton order_id=order.id total=order.total />
                                    });
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_details(for_details.clone());
                                                        }
                                                    >
                                                        {code}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=status_name tone=tone />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {pay}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && state.with(|s| s.items.is_empty())>
                        <div class="table__empty">"You have not placed any orders yet."</div>
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
