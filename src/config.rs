//! Fixed completion parameters and credential loading.
//!
//! Model parameters are compile-time constants; only the API key comes from
//! the environment (optionally seeded from a `.env` file), falling back to
//! the config bundled at build time.

use crate::ai::{ChatError, ChatResult};
use std::path::PathBuf;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

pub const MODEL: &str = "gpt-3.5-turbo";
pub const MAX_TOKENS: u64 = 500;
pub const TEMPERATURE: f64 = 0.7;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Provide clear, concise, and accurate answers.";

/// Printed by the console when the key is missing.
pub const SETUP_INSTRUCTIONS: &str = "❌ Error: OPENAI_API_KEY not found in .env file
Please create a .env file with your OpenAI API key
Example: OPENAI_API_KEY=sk-your-key-here";

/// Shown by the chat UI when the key is missing.
pub const SETUP_STEPS: &[&str] = &[
    "Create a `.env` file in the project root",
    "Add: `OPENAI_API_KEY=your-key-here`",
    "Restart the app",
];

/// Bundled config for builds without a process environment (web).
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const API_KEYS_URL: &str = "https://platform.openai.com/api-keys";

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionConfig {
    pub model: String,
    pub max_tokens: u64,
    pub temperature: f64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Load variables from `.env` if one exists. Existing environment values win.
///
/// Runs before logging is installed (so `RUST_LOG` can live in `.env`); the
/// caller logs the outcome.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_env() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_env() -> Result<Option<PathBuf>, dotenvy::Error> {
    Ok(None)
}

/// Environment first, then the bundled config.
pub fn api_key_from_env() -> ChatResult<String> {
    resolve_api_key(std::env::var(API_KEY_VAR).ok())
        .or_else(|_| resolve_api_key(config_value(BUNDLED_CONFIG, API_KEY_VAR)))
}

/// Blank values count as missing.
pub fn resolve_api_key(value: Option<String>) -> ChatResult<String> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ChatError::MissingCredential),
    }
}

/// Look up `key` in `KEY=VALUE` lines; `#` comments and blank lines are skipped.
pub fn config_value(source: &str, key: &str) -> Option<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}
