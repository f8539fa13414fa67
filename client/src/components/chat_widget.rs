//! Floating copilot chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Answers come from the local keyword rule table in `ops::copilot`. The
//! user's message is shown immediately; the bot reply lands after a short
//! delay so the exchange reads like a conversation.

use leptos::prelude::*;
use ops::copilot::{ChatMessage, Sender, is_code_styled};

use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let open = Memo::new(move |_| ui.get().chat_open);

    view! {
        {move || {
            if open.get() {
                view! { <ChatPanel chat=chat on_close=move || ui.update(|u| u.chat_open = false) /> }.into_any()
            } else {
                view! {
                    <button
                        class="chat-fab"
                        aria-label="Open CloudOps Copilot"
                        on:click=move |_| ui.update(|u| u.chat_open = true)
                    >
                        "💬"
                    </button>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ChatPanel(chat: RwSignal<ChatState>, on_close: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    let messages = Memo::new(move |_| chat.get().conversation.messages);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = messages.get().len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let mut pending = None;
        chat.update(|c| pending = c.submit());
        let Some(reply) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(ops::copilot::REPLY_DELAY_MS)).await;
            chat.try_update(|c| c.conversation.deliver(reply));
        });

        #[cfg(not(feature = "hydrate"))]
        chat.update(|c| c.conversation.deliver(reply));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || chat.get().can_send();

    view! {
        <div class="chat-panel" role="dialog" aria-label="CloudOps Copilot">
            <div class="chat-panel__header">
                <span class="chat-panel__title">"CloudOps Copilot"</span>
                <button class="chat-panel__close" aria-label="Close chat" on:click=move |_| on_close()>
                    "✕"
                </button>
            </div>
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || messages.get().into_iter().map(chat_bubble).collect_view()}
            </div>
            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about version, pods..."
                    prop:value=move || chat.get().input
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--contained chat-panel__send" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn chat_bubble(message: ChatMessage) -> impl IntoView {
    let is_bot = message.sender == Sender::Bot;
    let code_styled = is_code_styled(&message.text);

    view! {
        <div class="chat-bubble" class:chat-bubble--bot=is_bot class:chat-bubble--code=code_styled>
            {if is_bot {
                let rendered = render_markdown_html(&message.text);
                view! { <div class="chat-bubble__markdown" inner_html=rendered></div> }.into_any()
            } else {
                view! { <span>{message.text}</span> }.into_any()
            }}
        </div>
    }
}
