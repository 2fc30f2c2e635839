//! Chat screen state: the transcript and the pending composer input.
//!
//! All mutation goes through `&mut ChatScreen`, so the transcript has a single
//! writer and is strictly append-only.

use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// Greeting placed at the top of every new transcript.
pub const WELCOME_MESSAGE: &str = "Welcome to FalseGrip. This is the base chat shell.";

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
}

impl Message {
    fn welcome() -> Self {
        Self {
            id: MessageId::welcome(),
            role: Role::Assistant,
            content: WELCOME_MESSAGE.to_string(),
        }
    }

    fn from_user(content: String) -> Self {
        Self {
            id: MessageId::generate(),
            role: Role::User,
            content,
        }
    }
}

/// Local state of the chat screen.
#[derive(Debug, Clone)]
pub struct ChatScreen {
    messages: Vec<Message>,
    input: String,
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatScreen {
    /// Opens a screen holding only the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::welcome()],
            input: String::new(),
        }
    }

    /// Replaces the pending input.
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the send action is enabled.
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Appends the trimmed input as a user message and clears the input.
    ///
    /// Returns `None` without touching any state when the input is blank.
    pub fn send(&mut self) -> Option<&Message> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let message = Message::from_user(trimmed.to_string());
        log::debug!("appending user message {}", message.id);
        self.messages.push(message);
        self.input.clear();
        self.messages.last()
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new_screen_holds_only_welcome() {
        let screen = ChatScreen::new();
        assert_eq!(screen.messages().len(), 1);

        let welcome = &screen.messages()[0];
        assert_eq!(welcome.id.as_str(), "welcome");
        assert_eq!(welcome.role, Role::Assistant);
        assert_eq!(welcome.content, WELCOME_MESSAGE);
        assert_eq!(screen.input(), "");
        assert!(!screen.can_send());
    }

    #[test]
    fn update_input_replaces_buffer() {
        let mut screen = ChatScreen::new();
        screen.update_input("first");
        screen.update_input("  second ");
        assert_eq!(screen.input(), "  second ");
        assert!(screen.can_send());
    }

    #[test]
    fn send_appends_trimmed_user_message_and_clears_input() {
        let mut screen = ChatScreen::new();
        screen.update_input("  hello there \n");

        let sent = screen.send().expect("message sent").clone();
        assert_eq!(sent.role, Role::User);
        assert_eq!(sent.content, "hello there");

        assert_eq!(screen.messages().len(), 2);
        assert_eq!(screen.messages().last(), Some(&sent));
        assert_eq!(screen.input(), "");
        assert!(!screen.can_send());
    }

    #[test]
    fn blank_input_is_a_noop() {
        for blank in ["", " ", "\t\n  ", "\r\n"] {
            let mut screen = ChatScreen::new();
            screen.update_input(blank);

            assert!(!screen.can_send());
            assert!(screen.send().is_none());
            assert_eq!(screen.messages().len(), 1);
            assert_eq!(screen.input(), blank);
        }
    }

    #[test]
    fn transcript_grows_in_send_order() {
        let mut screen = ChatScreen::new();
        let inputs = ["one", "two", "   ", "three", "four", ""];
        for text in inputs {
            screen.update_input(text);
            screen.send();
        }

        let contents: Vec<&str> = screen
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, [WELCOME_MESSAGE, "one", "two", "three", "four"]);

        let ids: HashSet<&str> = screen.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), screen.messages().len());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
