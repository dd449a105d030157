pub mod state;

use self::state::{create_state, ALL_ROLES};
use crate::domain::a001_user::api::{ban_error_message, fetch_users, set_banned};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{clamp_page, SearchInput};
use crate::shared::modal_stack::confirm;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::context::use_auth;
use contracts::domain::a001_user::{User, UserStatusFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn UserList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let notifications = use_notifications();
    let (auth_state, _) = use_auth();

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            match fetch_users().await {
                Ok(users) => {
                    log::debug!("Loaded {} users", users.len());
                    state.update(|s| {
                        s.items = users;
                        s.page = clamp_page(s.page, s.total_pages());
                    });
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load users: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    let toggle_ban = move |user: User| {
        let ban = user.active;
        let verb = if ban { "Ban" } else { "Unban" };
        if !confirm(&format!("{} {}?", verb, user.email)) {
            return;
        }
        spawn_local(async move {
            match set_banned(user.id, ban).await {
                Ok(()) => {
                    state.update(|s| s.set_active(user.id, !ban));
                    notifications.success(format!(
                        "{} has been {}.",
                        user.email,
                        if ban { "banned" } else { "unbanned" }
                    ));
                }
                Err(e) => {
                    log::error!("{} failed for user {}: {}", verb, user.id, e);
                    notifications.error(ban_error_message(&e));
                }
            }
        });
    };

    let current_user_id = move || auth_state.with(|s| s.user_info.as_ref().map(|u| u.id));

    load();

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <PageHeader title="Users" subtitle="Accounts registered in the shop">
                <Badge variant="primary">{move || state.with(|s| s.total_count()).to_string()}</Badge>
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
                                    placeholder="Name or email..."
                                />
                            </div>
                            <label class="form__label">
                                "Role: "
                                <select
                                    class="form__select"
                                    prop:value=move || state.with(|s| s.role_filter.clone())
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        state.update(|s| {
                                            s.role_filter = value;
                                            s.page = 0;
                                        })
                                    }
                                >
                                    <option value=ALL_ROLES>"All"</option>
                                    {move || {
                                        state
                                            .with(|s| s.role_options())
                                            .into_iter()
                                            .map(|role| view! { <option value=role.clone()>{role.clone()}</option> })
                                            .collect_view()
                                    }}
                                </select>
                            </label>
                            <label class="form__label">
                                "Status: "
                                <select
                                    class="form__select"
                                    prop:value=move || state.with(|s| s.status_filter.as_str())
                                    on:change=move |ev| {
                                        let value = UserStatusFilter::from_str(&event_target_value(&ev));
                                        state.update(|s| {
                                            s.status_filter = value;
                                            s.page = 0;
                                        })
                                    }
                                >
                                    {[UserStatusFilter::All, UserStatusFilter::Active, UserStatusFilter::Inactive]
                                        .into_iter()
                                        .map(|f| view! { <option value=f.as_str()>{f.as_str()}</option> })
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

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.page_rows())
                                key=|u| (u.id, u.active)
                                children=move |user| {
                                    let is_self = current_user_id() == Some(user.id);
                                    let (variant, status) = if user.active {
                                        ("success", "Active")
                                    } else {
                                        ("error", "Inactive")
                                    };
                                    let label = if user.active { "Ban" } else { "Unban" };
                                    let for_click = user.clone();
                                    let user_id = user.id;
                                    let user_name = user.name.clone();
                                    let user_email = user.email.clone();
                                    let role_label = user.role_kind().label();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{user_id}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{user_name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{user_email}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{role_label}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><Badge variant=variant>{status}</Badge></TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=if user.active { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                                                        disabled=is_self
                                                        on_click=move |_| toggle_ban(for_click.clone())
                                                    >
                                                        {label}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && state.with(|s| s.total_count() == 0)>
                        <div class="table__empty">"No users match the filters."</div>
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
