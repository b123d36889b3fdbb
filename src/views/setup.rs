use crate::config::{API_KEYS_URL, SETUP_STEPS};
use dioxus::prelude::*;

/// Shown instead of the chat when no API key is configured.
#[component]
pub fn SetupNotice() -> Element {
    rsx! {
        div { class: "main-container",
            div { class: "notice error", "⚠️ OpenAI API key not found!" }
            div { class: "notice info",
                strong { "To use this app:" }
                ol {
                    for step in SETUP_STEPS.iter() {
                        li { "{step}" }
                    }
                }
                p {
                    "Get your API key from: "
                    a { href: API_KEYS_URL, target: "_blank", "{API_KEYS_URL}" }
                }
            }
        }
    }
}
