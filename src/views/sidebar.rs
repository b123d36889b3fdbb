use crate::transcript::Transcript;
use dioxus::prelude::*;

#[component]
pub fn Sidebar(transcript: Signal<Transcript>, sending: Signal<bool>) -> Element {
    let mut transcript = transcript;
    let count = transcript.read().turn_count();

    rsx! {
        aside { class: "sidebar",
            h2 { "ℹ️ About" }
            p { "This is an AI-powered Q&A bot that can:" }
            ul {
                li { "Answer questions on any topic" }
                li { "Remember conversation context" }
                li { "Provide detailed explanations" }
            }

            hr {}

            // Disabled mid-call so a late reply never lands in a fresh transcript.
            button {
                class: "btn", r#type: "button",
                disabled: sending(),
                onclick: move |_| transcript.write().clear(),
                "🔄 Clear Conversation"
            }

            hr {}

            h3 { "📊 Stats" }
            div { class: "metric",
                span { class: "metric-label", "Messages" }
                span { class: "metric-value", "{count}" }
            }
        }
    }
}
