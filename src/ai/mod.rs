/// AI module for the Q&A bot
///
/// Wraps the single outbound completion call behind the `CompletionBackend`
/// trait so both front-ends (and tests) share one calling convention: the
/// whole transcript goes out, one reply string or a typed `ChatError` comes
/// back.
///
/// # Architecture
///
/// - `client` - error types, the backend trait and `chat_reply`
/// - `providers` - the rig-backed OpenAI implementation and credential lookup
///
/// # Usage
///
/// ```rust,no_run
/// use qa_bot::ai::{self, chat_reply};
/// use qa_bot::types::ChatMessage;
///
/// # async fn example() -> Result<(), qa_bot::ai::ChatError> {
/// let backend = ai::providers::from_env()?;
/// let messages = vec![ChatMessage::system("Be brief."), ChatMessage::user("Hello!")];
/// let reply = chat_reply(backend.as_ref(), &messages).await?;
/// # Ok(())
/// # }
/// ```
mod client;
pub mod providers;

// Re-export main types
pub use client::{ChatError, ChatResult, CompletionBackend, ErrorKind, chat_reply};
