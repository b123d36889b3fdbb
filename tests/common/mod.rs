//! Fake completion backends shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use qa_bot::ai::{ChatError, ChatResult, CompletionBackend};
use qa_bot::types::ChatMessage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replies from a script, recording every transcript it was sent.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<ChatResult<String>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBackend {
    pub fn new(replies: impl IntoIterator<Item = ChatResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Self::new(replies.iter().map(|r| Ok(r.to_string())))
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Malformed("script exhausted".into())))
    }
}

pub fn failing(err: ChatError) -> Arc<ScriptedBackend> {
    ScriptedBackend::new([Err(err)])
}
