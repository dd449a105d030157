pub mod state;

use self::state::{create_state, EditingRow};
use crate::domain::a005_invoice_request::api::{apply_status, fetch_invoice_requests};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{clamp_page, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_order::order_code;
use contracts::domain::a005_invoice_request::InvoiceRequest;
use contracts::domain::common::{DocumentStatus, StatusTone};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// How long the save feedback stays visible, ms.
const FEEDBACK_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    Saved(String),
    Failed(String),
}

/// Approval queue for invoice requests.
#[component]
pub fn InvoiceRequestList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let feedback = RwSignal::new(None::<Feedback>);

    let show_feedback = move |value: Feedback| {
        feedback.set(Some(value.clone()));
        spawn_local(async move {
            TimeoutFuture::new(FEEDBACK_MS).await;
            // A newer message keeps its own timer.
            if feedback.get_untracked().as_ref() == Some(&value) {
                feedback.set(None);
            }
        });
    };

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_invoice_requests().await {
                Ok(items) => {
                    state.update(|s| {
                        s.items = items;
                        s.editing = None;
                        s.page = clamp_page(s.page, s.total_pages());
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load invoice requests: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let save = move |edit: EditingRow| {
        set_saving.set(true);
        spawn_local(async move {
            match apply_status(edit.request_id, edit.status).await {
                Ok(_) => {
                    log::info!("Invoice request {} -> {}", edit.request_id, edit.status.key());
                    state.update(|s| s.commit(edit.request_id, edit.status));
                    show_feedback(Feedback::Saved(format!("Status changed to \"{}\".", edit.status.label_en())));
                }
                Err(e) => {
                    log::error!("Failed to update invoice request {}: {}", edit.request_id, e);
                    show_feedback(Feedback::Failed(e.user_message()));
                }
            }
            set_saving.set(false);
        });
    };

    load();

    view! {
        <PageFrame page_id="a005_invoice_request--list" category=PAGE_CAT_LIST>
            <PageHeader title="Invoice requests" subtitle="Approve, reject or mark requests as paid">
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
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;">
                                <SearchInput
                                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                                    on_change=Callback::new(move |q: String| {
                                        state.update(|s| {
                                            s.search = q;
                                            s.page = 0;
                                        })
                                    })
                                    placeholder="Customer or order code..."
                                />
                            </div>
                            <label class="form__label">
                                "Status: "
                                <select
                                    class="form__select"
                                    on:change=move |ev| {
                                        let id = event_target_value(&ev).parse::<i64>().ok();
                                        state.update(|s| {
                                            s.status_filter = id.and_then(DocumentStatus::from_id);
                                            s.page = 0;
                                        })
                                    }
                                >
                                    <option value="">"All"</option>
                                    {DocumentStatus::ALL
                                        .into_iter()
                                        .map(|st| view! { <option value=st.id().to_string()>{st.label_en()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        </Flex>
                    </div>
                </div>

                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}
                {move || feedback.get().map(|f| {
                    let (intent, text) = match f {
                        Feedback::Saved(t) => (MessageBarIntent::Success, t),
                        Feedback::Failed(t) => (MessageBarIntent::Error, t),
                    };
                    view! {
                        <MessageBar intent=intent>
                            <MessageBarBody>{text}</MessageBarBody>
                        </MessageBar>
                    }
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.page_rows())
                                key=|r| (r.id, r.status_name.clone())
                                children=move |request| {
                                    view! {
                                        <InvoiceRequestRow
                                            request=request
                                            state=state
                                            saving=saving
                                            on_save=Callback::new(save)
                                        />
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && state.with(|s| s.total_count() == 0)>
                        <div class="table__empty">"No invoice requests."</div>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.total_count()))
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
fn InvoiceRequestRow(
    request: InvoiceRequest,
    state: RwSignal<state::InvoiceRequestListState>,
    saving: ReadSignal<bool>,
    on_save: Callback<EditingRow>,
) -> impl IntoView {
    let request_id = request.id;
    let editing = move || state.with(|s| s.editing.filter(|e| e.request_id == request_id));
    let tone = request
        .status()
        .map(|s| s.tone())
        .unwrap_or_else(|| StatusTone::for_status_name(&request.status_name));
    let status_name = request.status_name.clone();

    view! {
        <TableRow>
            <TableCell><TableCellLayout>{request.id}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>{request.order_id.map(order_code).unwrap_or_else(|| "-".to_string())}</TableCellLayout>
            </TableCell>
            <TableCell><TableCellLayout truncate=true>{request.username.clone()}</TableCellLayout></TableCell>
            <TableCell>
                <TableCellLayout>
                    {request.created_at.as_deref().map(format_datetime).unwrap_or_default()}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    {move || match editing() {
                        Some(edit) => view! {
                            <select
                                class="form__select"
                                prop:value=edit.status.id().to_string()
                                on:change=move |ev| {
                                    if let Some(st) = event_target_value(&ev).parse::<i64>().ok().and_then(DocumentStatus::from_id) {
                                        state.update(|s| s.pick_status(st));
                                    }
                                }
                            >
                                {DocumentStatus::ALL
                                    .into_iter()
                                    .map(|st| view! { <option value=st.id().to_string()>{st.label()}</option> })
                                    .collect_view()}
                            </select>
                        }
                        .into_any(),
                        None => view! { <StatusBadge label=status_name.clone() tone=tone /> }.into_any(),
                    }}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    {move || match editing() {
                        Some(edit) => view! {
                            <Flex gap=FlexGap::Small>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || saving.get())
                                    on_click=move |_| on_save.run(edit)
                                >
                                    "Save"
                                </Button>
                                <Button size=ButtonSize::Small on_click=move |_| state.update(|s| s.cancel_edit())>
                                    "Cancel"
                                </Button>
                            </Flex>
                        }
                        .into_any(),
                        None => view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| state.update(|s| s.begin_edit(request_id))
                            >
                                {icon("edit")}
                                " Edit"
                            </Button>
                        }
                        .into_any(),
                    }}
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}
