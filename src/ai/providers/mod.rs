pub mod openai;

use super::{ChatResult, CompletionBackend};
use crate::config::{self, CompletionConfig};
use std::sync::Arc;

pub use openai::OpenAiBackend;

/// Build the configured completion backend.
///
/// Fails with `ChatError::MissingCredential` when `OPENAI_API_KEY` is unset
/// or blank; no request is attempted in that case.
pub fn from_env() -> ChatResult<Arc<dyn CompletionBackend>> {
    let api_key = config::api_key_from_env()?;
    Ok(from_api_key(&api_key))
}

pub fn from_api_key(api_key: &str) -> Arc<dyn CompletionBackend> {
    let config = CompletionConfig::default();
    tracing::info!(model = %config.model, "using OpenAI backend");
    Arc::new(OpenAiBackend::new(api_key, config))
}
