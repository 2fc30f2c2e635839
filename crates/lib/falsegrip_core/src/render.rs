//! Render model for the chat screen.
//!
//! Front ends turn a [`ChatScreen`] into rows and a composer state and only
//! deal with layout from there.

use serde::Serialize;

use crate::chat::{ChatScreen, Role};
use crate::id::MessageId;

pub const SCREEN_TITLE: &str = "FalseGrip Client Chat";
pub const SCREEN_SUBTITLE: &str = "Base Expo scaffold";
pub const INPUT_PLACEHOLDER: &str = "Type a message";

/// Horizontal placement of a bubble within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    End,
}

/// Visual style of a message bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleStyle {
    pub alignment: Alignment,
    pub background: &'static str,
    pub text_color: &'static str,
}

impl BubbleStyle {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::User => Self {
                alignment: Alignment::End,
                background: "#1e293b",
                text_color: "#f8fafc",
            },
            Role::Assistant => Self {
                alignment: Alignment::Start,
                background: "#e2e8f0",
                text_color: "#0f172a",
            },
        }
    }
}

/// One rendered transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow<'a> {
    pub id: &'a MessageId,
    pub role: Role,
    pub content: &'a str,
    pub style: BubbleStyle,
}

/// Renders the transcript oldest first.
pub fn render_transcript(screen: &ChatScreen) -> Vec<RenderedRow<'_>> {
    screen
        .messages()
        .iter()
        .map(|message| RenderedRow {
            id: &message.id,
            role: message.role,
            content: &message.content,
            style: BubbleStyle::for_role(message.role),
        })
        .collect()
}

/// State of the input bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerState<'a> {
    pub placeholder: &'static str,
    pub text: &'a str,
    pub send_enabled: bool,
}

impl<'a> ComposerState<'a> {
    pub fn of(screen: &'a ChatScreen) -> Self {
        Self {
            placeholder: INPUT_PLACEHOLDER,
            text: screen.input(),
            send_enabled: screen.can_send(),
        }
    }
}
