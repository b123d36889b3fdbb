//! Blocking console front-end.
//!
//! Reads one line per turn, recognizes the exit and clear keywords, and
//! prints each reply. Generic over the reader and writer so the loop can be
//! driven from tests.

use crate::ai::{ChatResult, CompletionBackend};
use crate::config::{DEFAULT_SYSTEM_PROMPT, SETUP_INSTRUCTIONS};
use crate::conversation::Conversation;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const RULE_WIDTH: usize = 60;
const EXIT_KEYWORDS: &[&str] = &["quit", "exit", "bye"];
const CLEAR_KEYWORD: &str = "clear";

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleInput {
    Exit,
    Clear,
    Empty,
    Question(String),
}

pub fn parse_input(line: &str) -> ConsoleInput {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();
    if EXIT_KEYWORDS.contains(&lowered.as_str()) {
        ConsoleInput::Exit
    } else if lowered == CLEAR_KEYWORD {
        ConsoleInput::Clear
    } else if trimmed.is_empty() {
        ConsoleInput::Empty
    } else {
        ConsoleInput::Question(trimmed.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    AwaitingInput,
    CallInFlight,
    Displaying,
    Cleared,
    Exited,
}

pub struct ConsoleSession {
    conversation: Conversation,
    state: LoopState,
}

impl ConsoleSession {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            conversation: Conversation::new(backend, DEFAULT_SYSTEM_PROMPT),
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Handle one line of input and return the state the loop settles in.
    pub async fn handle_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> io::Result<LoopState> {
        match parse_input(line) {
            ConsoleInput::Exit => {
                writeln!(out, "\n👋 Thanks for chatting! Goodbye!")?;
                self.state = LoopState::Exited;
            }
            ConsoleInput::Clear => {
                self.state = LoopState::Cleared;
                self.conversation.clear();
                writeln!(out, "\n🔄 Conversation cleared! Starting fresh.")?;
                self.state = LoopState::AwaitingInput;
            }
            ConsoleInput::Empty => {
                writeln!(out, "⚠️  Please enter a question!")?;
                self.state = LoopState::AwaitingInput;
            }
            ConsoleInput::Question(question) => {
                self.state = LoopState::CallInFlight;
                write!(out, "\n🤖 AI: ")?;
                out.flush()?;
                let reply = self.conversation.ask(&question).await;
                self.state = LoopState::Displaying;
                writeln!(out, "{reply}")?;
                self.state = LoopState::AwaitingInput;
            }
        }
        Ok(self.state)
    }

    /// Prompt and answer until an exit keyword or end of input.
    pub async fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> io::Result<()> {
        print_usage(&mut out)?;
        self.state = LoopState::AwaitingInput;

        let mut line = String::new();
        while self.state != LoopState::Exited {
            write!(out, "\n👤 You: ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("end of input");
                writeln!(out)?;
                self.handle_line("exit", &mut out).await?;
                break;
            }
            self.handle_line(&line, &mut out).await?;
        }

        tracing::info!(
            turns = self.conversation.transcript().turn_count(),
            "console session ended"
        );
        Ok(())
    }
}

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "🤖 AI Q&A Bot - Command Line Edition")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nInitializing...")
}

fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "✅ Connected to OpenAI!")?;
    writeln!(out, "\nHow to use:")?;
    writeln!(out, "  • Type your question and press Enter")?;
    writeln!(out, "  • Type 'quit' or 'exit' to end the conversation")?;
    writeln!(out, "  • Type 'clear' to start a new conversation")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Entry point shared by the binary and tests.
///
/// A missing credential prints the setup instructions once and returns
/// without reading any input.
pub async fn run_console<R: BufRead, W: Write>(
    backend: ChatResult<Arc<dyn CompletionBackend>>,
    input: R,
    mut out: W,
) -> io::Result<LoopState> {
    print_banner(&mut out)?;

    let backend = match backend {
        Ok(backend) => backend,
        Err(err) => {
            tracing::error!("cannot start: {err}");
            writeln!(out, "{SETUP_INSTRUCTIONS}")?;
            return Ok(LoopState::Idle);
        }
    };

    let mut session = ConsoleSession::new(backend);
    session.run(input, &mut out).await?;
    Ok(session.state())
}
