//! Message model and the send form it is built from.
//!
//! # Invariants
//! - `recipient` and `text` are stored trimmed and never blank.
//! - `sender` is resolved by the store from the session identity.

use super::timestamp::{iso_millis, truncate_to_millis};
use super::validation::{require_text, ValidationError};
use super::Timestamped;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One persisted sender -> recipient text record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub recipient: String,
    pub text: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

/// Validated send request: both fields trimmed and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    recipient: String,
    text: String,
}

impl OutgoingMessage {
    /// Validates raw form values.
    ///
    /// # Errors
    /// - `ValidationError::BlankField` for `recipient` first, then `text`.
    pub fn parse(recipient: &str, text: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            recipient: require_text("recipient", recipient)?,
            text: require_text("text", text)?,
        })
    }

    /// Attributes the message to `sender` at `created_at`.
    pub fn into_message(self, sender: impl Into<String>, created_at: DateTime<Utc>) -> Message {
        Message {
            sender: sender.into(),
            recipient: self.recipient,
            text: self.text,
            created_at: truncate_to_millis(created_at),
        }
    }
}

/// Raw contents of the send-message form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageDraft {
    pub recipient: String,
    pub text: String,
}

impl MessageDraft {
    pub fn new(recipient: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            text: text.into(),
        }
    }

    /// Clears both fields, as a form reset does.
    pub fn reset(&mut self) {
        self.recipient.clear();
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.recipient.is_empty() && self.text.is_empty()
    }
}

impl Timestamped for Message {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
