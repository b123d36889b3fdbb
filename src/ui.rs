use crate::ai::{self, CompletionBackend};
use crate::config::{DEFAULT_SYSTEM_PROMPT, MODEL};
use crate::transcript::Transcript;
use crate::views::{ChatView, SetupNotice, Sidebar};
use dioxus::prelude::*;
use std::sync::Arc;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Completion backend handed down to the chat view.
#[derive(Clone)]
pub struct Backend(pub Arc<dyn CompletionBackend>);

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn App() -> Element {
    let backend = use_hook(|| ai::providers::from_env().map(Backend));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AppHeader {}
        if let Ok(backend) = backend {
            ChatSession { backend }
        } else {
            SetupNotice {}
        }
    }
}

#[component]
fn AppHeader() -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "title", "🤖 AI Q&A Bot" }
            p { class: "subtitle", "Ask me anything! I'm powered by {MODEL}" }
        }
    }
}

/// One conversation. Each app instance owns its own transcript.
#[component]
fn ChatSession(backend: Backend) -> Element {
    let transcript = use_signal(|| Transcript::new(DEFAULT_SYSTEM_PROMPT));
    let sending = use_signal(|| false);

    rsx! {
        div { class: "layout",
            Sidebar { transcript, sending }
            ChatView { backend, transcript, sending }
        }
    }
}
