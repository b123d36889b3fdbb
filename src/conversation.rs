use crate::ai::{CompletionBackend, chat_reply};
use crate::transcript::Transcript;
use crate::types::ChatMessage;
use std::sync::Arc;

/// One independent chat session: a transcript plus the backend it talks to.
///
/// A turn is `Transcript::begin_turn`, `chat_reply`, `Transcript::append_reply`.
/// The chat UI runs the same three steps but releases the transcript while
/// the call is in flight, so it cannot hold a `Conversation` across the await.
pub struct Conversation {
    transcript: Transcript,
    backend: Arc<dyn CompletionBackend>,
}

impl Conversation {
    pub fn new(backend: Arc<dyn CompletionBackend>, system_prompt: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(system_prompt),
            backend,
        }
    }

    /// Ask one question and return the text shown as the assistant turn.
    ///
    /// On failure the returned text is the rendered error; it is recorded in
    /// the transcript either way.
    pub async fn ask(&mut self, question: &str) -> String {
        let pending = self.transcript.begin_turn(question);
        let outcome = chat_reply(self.backend.as_ref(), &pending).await;
        self.transcript.append_reply(&outcome).content.clone()
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.all()
    }
}
