use crate::language::Language;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Text,
}

/// One entry of the conversation. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub language: Language,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

impl ChatMessage {
    fn new(text: String, sender: Sender, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Local::now(),
            language,
            kind: MessageKind::Text,
        }
    }

    pub fn user(text: impl Into<String>, language: Language) -> Self {
        Self::new(text.into(), Sender::User, language)
    }

    pub fn assistant(text: impl Into<String>, language: Language) -> Self {
        Self::new(text.into(), Sender::Assistant, language)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// `HH:MM` as shown under each bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = ChatMessage::user("hi", Language::English);
        let b = ChatMessage::user("hi", Language::English);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_host_field_names() {
        let msg = ChatMessage::assistant("നമസ്കാരം", Language::Malayalam);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "assistant");
        assert_eq!(json["type"], "text");
        assert_eq!(json["language"], "malayalam");
        assert_eq!(json["text"], "നമസ്കാരം");
    }

    #[test]
    fn time_label_is_hours_and_minutes() {
        let msg = ChatMessage::user("hi", Language::English);
        assert_eq!(msg.time_label().len(), 5);
        assert!(msg.is_user());
    }
}
