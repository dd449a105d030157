//! Toast notifications shown in the bottom-right corner.
//!
//! Each toast closes itself after its timeout; an optional action button
//! (e.g. "Undo") runs a callback and dismisses the toast.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const DEFAULT_TOAST_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "toast toast--info",
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone)]
pub struct NotificationAction {
    pub label: String,
    pub on_click: Callback<()>,
}

#[derive(Clone)]
struct Notification {
    id: u64,
    kind: NotificationKind,
    message: String,
    action: Option<NotificationAction>,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Shows a toast for `timeout_ms`; returns its id.
    pub fn push(
        &self,
        kind: NotificationKind,
        message: impl Into<String>,
        action: Option<NotificationAction>,
        timeout_ms: u32,
    ) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                message: message.into(),
                action,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message, None, DEFAULT_TOAST_MS);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message, None, DEFAULT_TOAST_MS);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NotificationKind::Warning, message, None, DEFAULT_TOAST_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message, None, DEFAULT_TOAST_MS);
    }

    /// Success toast carrying an action button, e.g. Undo.
    pub fn success_with_action(
        &self,
        message: impl Into<String>,
        label: impl Into<String>,
        on_click: Callback<()>,
        timeout_ms: u32,
    ) -> u64 {
        let action = NotificationAction {
            label: label.into(),
            on_click,
        };
        self.push(NotificationKind::Success, message, Some(action), timeout_ms)
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the toast stack; mounted once at the application root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let action_view = n.action.clone().map(|action| {
                        view! {
                            <button
                                class="toast__action"
                                on:click=move |_| {
                                    svc.dismiss(id);
                                    action.on_click.run(());
                                }
                            >
                                {action.label.clone()}
                            </button>
                        }
                    });
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="toast__message">{n.message.clone()}</span>
                            {action_view}
                            <button class="toast__close" title="Close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
