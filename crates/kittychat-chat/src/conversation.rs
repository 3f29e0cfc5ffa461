use kittychat_models::Message;

use crate::persona::{GREETING, SYSTEM_PROMPT};

/// Ordered chat history. Turn 0 is always the system persona; turns are
/// only ever appended after it, never reordered, and never mutated.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create the fixed two-turn initial state: system persona + greeting
    pub fn new() -> Self {
        Self {
            messages: vec![Message::system(SYSTEM_PROMPT), Message::assistant(GREETING)],
        }
    }

    /// Append a user turn
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Append an assistant turn (reply text or error string alike)
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Clear back to the initial two-turn state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Full ordered history, system turn included
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Turns to render in a chat panel (everything except the system turn)
    pub fn visible(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| !m.is_system())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state_is_persona_plus_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[0].role, "system");
        assert_eq!(conversation.messages()[0].content, SYSTEM_PROMPT);
        assert_eq!(conversation.messages()[1].role, "assistant");
        assert_eq!(conversation.messages()[1].content, GREETING);
    }

    #[test]
    fn test_system_turn_survives_send_cycles() {
        let mut conversation = Conversation::new();
        for i in 0..50 {
            conversation.push_user(format!("mensaje {}", i));
            conversation.push_assistant(format!("respuesta {}", i));
        }

        let first = &conversation.messages()[0];
        assert_eq!(first.role, "system");
        assert_eq!(first.content, SYSTEM_PROMPT);
        assert_eq!(conversation.len(), 102);
    }

    #[test]
    fn test_appends_preserve_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant("¡Hola!");

        let roles: Vec<&str> = conversation
            .messages()
            .iter()
            .map(|m| m.role.as_str())
            .collect();
        assert_eq!(roles, vec!["system", "assistant", "user", "assistant"]);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant("¡Hola!");
        conversation.reset();

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.messages()[1].content, GREETING);
    }

    #[test]
    fn test_visible_skips_system_turn() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");

        let visible: Vec<&str> = conversation.visible().map(|m| m.role.as_str()).collect();
        assert_eq!(visible, vec!["assistant", "user"]);
    }
}
