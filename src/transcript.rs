use crate::ai::ChatResult;
use crate::types::{ChatMessage, Role};

/// Ordered record of one conversation.
///
/// Always starts with the system message it was created with. Grows only by
/// appending; `clear` drops everything except that first message.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    system_prompt: String,
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        Self {
            messages: vec![ChatMessage::system(system_prompt.clone())],
            system_prompt,
        }
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    /// Append the user turn and return what to submit for it: the whole
    /// transcript, ending with that turn.
    pub fn begin_turn(&mut self, question: impl Into<String>) -> Vec<ChatMessage> {
        self.append(Role::User, question);
        self.messages.clone()
    }

    /// Record the outcome of a completion call as the assistant turn.
    ///
    /// Failures are stored as their user-visible text so the conversation
    /// can carry on.
    pub fn append_reply(&mut self, outcome: &ChatResult<String>) -> &ChatMessage {
        let content = match outcome {
            Ok(reply) => reply.clone(),
            Err(err) => err.to_reply(),
        };
        self.messages.push(ChatMessage::assistant(content));
        &self.messages[self.messages.len() - 1]
    }

    pub fn all(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn all_except_last(&self) -> &[ChatMessage] {
        match self.messages.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn clear(&mut self) {
        let dropped = self.turn_count();
        self.messages.clear();
        self.messages.push(ChatMessage::system(self.system_prompt.clone()));
        tracing::info!(dropped, "conversation cleared");
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// User and assistant turns, without the leading system message.
    pub fn turns(&self) -> &[ChatMessage] {
        self.messages.get(1..).unwrap_or(&[])
    }

    pub fn turn_count(&self) -> usize {
        self.turns().len()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatError;

    fn transcript() -> Transcript {
        Transcript::new("be helpful")
    }

    #[test]
    fn starts_with_only_the_system_message() {
        let t = transcript();
        assert_eq!(t.len(), 1);
        assert_eq!(t.all()[0], ChatMessage::system("be helpful"));
        assert!(t.turns().is_empty());
    }

    #[test]
    fn preserves_append_order() {
        let mut t = transcript();
        t.append(Role::User, "one");
        t.append(Role::Assistant, "two");
        t.append(Role::User, "three");

        let roles: Vec<Role> = t.all().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        let contents: Vec<&str> = t.turns().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }

    #[test]
    fn all_except_last_drops_one_entry() {
        let mut t = transcript();
        assert!(t.all_except_last().is_empty());

        t.append(Role::User, "hello");
        t.append(Role::Assistant, "hi");
        assert_eq!(t.all_except_last(), &t.all()[..2]);
        assert_eq!(t.all_except_last().len(), t.len() - 1);
    }

    #[test]
    fn clear_resets_to_system_message() {
        let mut t = transcript();
        for i in 0..10 {
            t.append(Role::User, format!("q{i}"));
            t.append(Role::Assistant, format!("a{i}"));
        }
        t.clear();
        assert_eq!(t.len(), 1);
        assert_eq!(t.all(), &[ChatMessage::system("be helpful")]);

        t.clear();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn begin_turn_submits_history_with_new_question() {
        let mut t = transcript();
        t.append(Role::User, "earlier");
        t.append(Role::Assistant, "reply");

        let pending = t.begin_turn("now");

        assert_eq!(pending, t.all());
        assert_eq!(pending.last(), Some(&ChatMessage::user("now")));
        assert_eq!(pending.len(), 4);
    }

    #[test]
    fn failed_reply_is_recorded_as_error_text() {
        let mut t = transcript();
        t.append(Role::User, "hello");
        t.append_reply(&Err(ChatError::Transport("connection refused".into())));

        let last = t.last().expect("assistant turn");
        assert_eq!(last.role, Role::Assistant);
        assert!(last.content.starts_with("❌ Error getting response:"));
        assert!(last.content.contains("connection refused"));
        assert_eq!(t.turn_count(), 2);
    }
}
