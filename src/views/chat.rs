use crate::ai::chat_reply;
use crate::render::markdown_to_html;
use crate::transcript::Transcript;
use crate::types::{ChatMessage, Role};
use crate::ui::Backend;
use dioxus::events::Key;
use dioxus::prelude::*;

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant | Role::System => "assistant",
    }
}

#[component]
pub fn ChatView(
    backend: Backend,
    transcript: Signal<Transcript>,
    sending: Signal<bool>,
) -> Element {
    let backend = use_signal(|| backend.clone());
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut transcript = transcript;
        let mut sending = sending;
        let mut input = input;
        move |text: String| {
            let question = text.trim().to_string();
            if question.is_empty() || sending() {
                return;
            }

            let pending = transcript.write().begin_turn(question);
            input.set(String::new());
            sending.set(true);

            let client = backend.read().0.clone();
            spawn(async move {
                let outcome = chat_reply(client.as_ref(), &pending).await;
                transcript.write().append_reply(&outcome);
                sending.set(false);
            });
        }
    };

    let turns = transcript.read().turns().to_vec();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for (i, msg) in turns.into_iter().enumerate() {
                        MessageBubble { key: "{i}", message: msg }
                    }
                    if sending() {
                        div { class: "message-row assistant",
                            div { class: "avatar assistant", "🤖" }
                            div { class: "bubble assistant",
                                span { class: "shimmer-text", "Thinking…" }
                            }
                        }
                    }
                }
            }

            form { class: "composer",
                div { class: "hstack",
                    textarea {
                        rows: "1", placeholder: "Ask me anything...",
                        value: "{input}", oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        disabled: sending(), autofocus: true,
                    }
                    button {
                        class: "btn btn-primary", r#type: "button",
                        disabled: sending() || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let class = role_class(message.role);
    rsx! {
        div { class: "message-row {class}",
            if message.role == Role::Assistant {
                div { class: "avatar assistant", "🤖" }
            }
            div { class: "bubble {class}",
                if message.role == Role::Assistant {
                    div { class: "md", dangerous_inner_html: markdown_to_html(&message.content) }
                } else {
                    "{message.content}"
                }
            }
            if message.role == Role::User {
                div { class: "avatar user", "👤" }
            }
        }
    }
}
