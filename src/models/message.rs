//! Message model for the patient/caregiver inbox.

use super::fields::{deserialize_id, PersonRef};
use serde::{Deserialize, Serialize};

/// A message received in the portal inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Sender record when the backend embeds it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<PersonRef>,

    /// Flat sender name when the backend sends one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,

    /// Message text (may contain HTML from the rich-text composer)
    #[serde(alias = "content", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl Message {
    /// Create a message with a sender name and body.
    pub fn new(id: impl Into<String>, sender_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender_name: Some(sender_name.into()),
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// The sender's name, from the flat field or the embedded sender.
    pub fn sender_display_name(&self) -> String {
        match self.sender_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self
                .sender
                .as_ref()
                .map(PersonRef::full_name)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_from_embedded_person() {
        let message: Message = serde_json::from_str(
            r#"{"id": 7, "sender": {"firstName": "Ada", "lastName": "Obi"}, "content": "Hello"}"#,
        )
        .unwrap();

        assert_eq!(message.id, "7");
        assert_eq!(message.sender_display_name(), "Ada Obi");
        assert_eq!(message.body.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_flat_sender_name_wins() {
        let mut message = Message::new("1", "Dr. Bello", "Your results are in");
        message.sender = Some(PersonRef::new("Someone", "Else"));
        assert_eq!(message.sender_display_name(), "Dr. Bello");
    }

    #[test]
    fn test_missing_sender() {
        let message = Message::default();
        assert_eq!(message.sender_display_name(), "");
    }
}
