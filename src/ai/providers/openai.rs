use crate::ai::{ChatError, ChatResult, CompletionBackend};
use crate::config::CompletionConfig;
use crate::types::{ChatMessage, Role};
use async_trait::async_trait;
use rig::agent::AgentBuilder;
use rig::client::CompletionClient;
use rig::completion::Chat;
use rig::providers::openai;

/// OpenAI chat completions through rig's provider client.
pub struct OpenAiBackend {
    client: openai::Client,
    config: CompletionConfig,
}

impl OpenAiBackend {
    pub fn new(api_key: &str, config: CompletionConfig) -> Self {
        Self {
            client: openai::Client::new(api_key),
            config,
        }
    }

    pub fn with_client(client: openai::Client, config: CompletionConfig) -> Self {
        Self { client, config }
    }
}

/// Split a transcript into rig's agent inputs: preamble, prior history, and
/// the final user prompt.
pub(crate) fn split_transcript(
    messages: &[ChatMessage],
) -> ChatResult<(String, Vec<rig::message::Message>, String)> {
    let (prompt, earlier) = match messages.split_last() {
        Some((last, earlier)) if last.role == Role::User => (last.content.clone(), earlier),
        _ => return Err(ChatError::NoPendingTurn),
    };

    let preamble = earlier
        .iter()
        .filter(|msg| msg.role == Role::System)
        .map(|msg| msg.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let history = earlier
        .iter()
        .filter_map(|msg| match msg.role {
            Role::System => None,
            Role::User => Some(rig::message::Message::user(&msg.content)),
            Role::Assistant => Some(rig::message::Message::assistant(&msg.content)),
        })
        .collect();

    Ok((preamble, history, prompt))
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<String> {
        let (preamble, history, prompt) = split_transcript(messages)?;

        // Chat completions endpoint, not the Responses API `agent()` defaults to.
        let model = self
            .client
            .completion_model(&self.config.model)
            .completions_api();
        let agent = AgentBuilder::new(model)
            .preamble(&preamble)
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build();

        let reply = agent.chat(prompt.as_str(), history).await?;
        if reply.trim().is_empty() {
            return Err(ChatError::Malformed("empty completion".to_string()));
        }
        Ok(reply)
    }
}
