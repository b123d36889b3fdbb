//! Integration tests for the shared turn logic.
//!
//! Drives `Conversation` against scripted backends and checks what gets
//! recorded and what gets submitted.

mod common;

use common::{ScriptedBackend, failing};
use qa_bot::ai::{ChatError, CompletionBackend, ErrorKind};
use qa_bot::conversation::Conversation;
use qa_bot::types::{ChatMessage, Role};
use std::sync::Arc;

const SYSTEM: &str = "You are a test assistant.";

fn conversation(backend: Arc<ScriptedBackend>) -> Conversation {
    let backend: Arc<dyn CompletionBackend> = backend;
    Conversation::new(backend, SYSTEM)
}

mod turn_tests {
    use super::*;

    #[tokio::test]
    async fn hello_scenario() {
        let backend = ScriptedBackend::replying(&["Hi there!"]);
        let mut chat = conversation(backend.clone());
        assert_eq!(chat.messages(), &[ChatMessage::system(SYSTEM)]);

        let reply = chat.ask("Hello").await;

        assert_eq!(reply, "Hi there!");
        assert_eq!(
            chat.messages(),
            &[
                ChatMessage::system(SYSTEM),
                ChatMessage::user("Hello"),
                ChatMessage::assistant("Hi there!"),
            ]
        );
        // Submitted: full transcript including the new user turn.
        assert_eq!(
            backend.calls(),
            vec![vec![ChatMessage::system(SYSTEM), ChatMessage::user("Hello")]]
        );
    }

    #[tokio::test]
    async fn later_turns_carry_the_whole_history() {
        let backend = ScriptedBackend::replying(&["first", "second"]);
        let mut chat = conversation(backend.clone());

        chat.ask("one").await;
        chat.ask("two").await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[1],
            vec![
                ChatMessage::system(SYSTEM),
                ChatMessage::user("one"),
                ChatMessage::assistant("first"),
                ChatMessage::user("two"),
            ]
        );
        assert_eq!(chat.transcript().turn_count(), 4);
    }

    #[tokio::test]
    async fn clear_starts_over_with_system_message() {
        let backend = ScriptedBackend::replying(&["a", "b"]);
        let mut chat = conversation(backend.clone());

        chat.ask("before").await;
        chat.clear();
        assert_eq!(chat.messages(), &[ChatMessage::system(SYSTEM)]);

        chat.ask("after").await;
        assert_eq!(
            backend.calls()[1],
            vec![ChatMessage::system(SYSTEM), ChatMessage::user("after")]
        );
    }
}

mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn failed_call_is_recorded_and_history_kept() {
        let backend = ScriptedBackend::new([
            Ok("fine".to_string()),
            Err(ChatError::Transport("connection reset".into())),
            Ok("back again".to_string()),
        ]);
        let mut chat = conversation(backend);

        chat.ask("first").await;
        let reply = chat.ask("second").await;

        assert!(reply.starts_with("❌ Error getting response:"));
        assert!(reply.contains("connection reset"));

        let roles: Vec<Role> = chat.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::System,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
        assert_eq!(chat.messages()[2].content, "fine");

        assert_eq!(chat.ask("third").await, "back again");
        assert_eq!(chat.transcript().turn_count(), 6);
    }

    #[tokio::test]
    async fn rejection_text_names_the_service_error() {
        let mut chat = conversation(failing(ChatError::Rejected("invalid api key".into())));

        let reply = chat.ask("hello").await;

        assert_eq!(
            reply,
            "❌ Error getting response: service rejected the request: invalid api key"
        );
    }

    #[test]
    fn error_categories_are_distinguishable() {
        assert_eq!(ChatError::MissingCredential.kind(), ErrorKind::Setup);
        assert_eq!(
            ChatError::Transport("timeout".into()).kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            ChatError::Rejected("429".into()).kind(),
            ErrorKind::Service
        );
    }
}

mod detached_turn_tests {
    use super::*;
    use qa_bot::ai::chat_reply;
    use qa_bot::transcript::Transcript;

    // The chat view's sequence: the transcript is released between starting
    // the turn and recording the reply.

    #[tokio::test]
    async fn failing_backend_still_records_assistant_turn() {
        let backend = failing(ChatError::Rejected("quota exceeded".into()));
        let mut transcript = Transcript::new(SYSTEM);
        transcript.append(Role::User, "earlier");
        transcript.append(Role::Assistant, "kept");

        let pending = transcript.begin_turn("Hello");
        assert_eq!(transcript.turn_count(), 3);

        let outcome = chat_reply(backend.as_ref(), &pending).await;
        let recorded = transcript.append_reply(&outcome).clone();

        assert_eq!(recorded.role, Role::Assistant);
        assert!(recorded.content.contains("quota exceeded"));
        assert_eq!(
            transcript.all(),
            &[
                ChatMessage::system(SYSTEM),
                ChatMessage::user("earlier"),
                ChatMessage::assistant("kept"),
                ChatMessage::user("Hello"),
                recorded,
            ]
        );
        assert_eq!(backend.calls(), vec![pending]);
    }

    #[tokio::test]
    async fn submits_the_same_slice_as_the_console() {
        let detached = ScriptedBackend::replying(&["Hi there!"]);
        let mut transcript = Transcript::new(SYSTEM);
        let pending = transcript.begin_turn("Hello");
        let outcome = chat_reply(detached.as_ref(), &pending).await;
        transcript.append_reply(&outcome);

        let owned = ScriptedBackend::replying(&["Hi there!"]);
        let mut chat = conversation(owned.clone());
        chat.ask("Hello").await;

        assert_eq!(detached.calls(), owned.calls());
        assert_eq!(transcript.all(), chat.messages());
    }
}

mod wire_tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);

        let parsed: ChatMessage =
            serde_json::from_str(r#"{"role":"system","content":"rules"}"#).unwrap();
        assert_eq!(parsed, ChatMessage::system("rules"));
    }
}
