//! Draft, payload and server-confirmed message types.

use serde::{Deserialize, Serialize};

/// Text currently held by the message input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftMessage {
    text: String,
}

impl DraftMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether there is nothing to send once surrounding whitespace is removed.
    pub fn is_blank(&self) -> bool {
        self.text
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
            .is_empty()
    }
}

/// A message the chat endpoint confirmed.
///
/// `content` is exactly what the sender typed and must be escaped before it
/// is interpolated into markup. `created_at` is already formatted for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentMessage {
    /// Server-assigned message ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Message body.
    pub content: String,
    /// Display timestamp, e.g. `"12:00"`.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub is_read: bool,
}

impl SentMessage {
    pub fn new(content: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            created_at: created_at.into(),
            sender_id: None,
            sender_name: None,
            is_read: false,
        }
    }
}

/// Ordered form fields sent with one submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Repeated names are kept, as in a browser form.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
