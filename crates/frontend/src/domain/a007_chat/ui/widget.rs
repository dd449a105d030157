use contracts::domain::a007_chat::ChatRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a007_chat::api::send_conversation;
use crate::domain::a007_chat::view_model::ChatVm;
use crate::shared::icons::icon;

/// Floating support chat, available on every page of the console.
/// The view model lives in context so the sidebar can open it too.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let vm = use_context::<ChatVm>().expect("ChatVm context not found");
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move |_| {
        vm.messages.track();
        vm.is_sending.track();
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || container.set_scroll_top(container.scroll_height()));
        }
    });

    let send = move || {
        let Some(history) = vm.take_outgoing() else {
            return;
        };
        spawn_local(async move {
            vm.receive(send_conversation(history).await);
        });
    };

    view! {
        <Show
            when=move || vm.is_open.get()
            fallback=move || {
                view! {
                    <button class="chat-toggle" title="Support chat" on:click=move |_| vm.is_open.set(true)>
                        {icon("chat")}
                    </button>
                }
            }
        >
            <div class="chat-box">
                <div class="chat-box__header">
                    <span>"Support assistant"</span>
                    <button class="chat-box__close" title="Close" on:click=move |_| vm.is_open.set(false)>
                        {icon("x")}
                    </button>
                </div>
                <div class="chat-box__messages" node_ref=messages_ref>
                    <Show when=move || vm.messages.with(|m| m.is_empty())>
                        <div class="chat-box__hint">"Ask about products, orders or payments."</div>
                    </Show>
                    <For
                        each={move || vm.messages.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key={|(idx, _)| *idx}
                        children={|(_, msg)| {
                            let class = match msg.role {
                                ChatRole::User => "chat-msg chat-msg--user",
                                _ => "chat-msg chat-msg--bot",
                            };
                            view! { <div class=class><span class="chat-msg__text">{msg.content}</span></div> }
                        }}
                    />
                    <Show when=move || vm.is_sending.get()>
                        <div class="chat-msg chat-msg--bot chat-msg--typing">
                            <span class="typing-dot"></span>
                            <span class="typing-dot"></span>
                            <span class="typing-dot"></span>
                        </div>
                    </Show>
                </div>
                <div class="chat-box__input">
                    <input
                        type="text"
                        class="chat-box__field"
                        placeholder="Type a message..."
                        prop:value=move || vm.input.get()
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send();
                            }
                        }
                    />
                    <button
                        class="chat-box__send"
                        title="Send"
                        disabled=move || vm.is_sending.get() || vm.input.with(|i| i.trim().is_empty())
                        on:click=move |_| send()
                    >
                        {icon("send")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
