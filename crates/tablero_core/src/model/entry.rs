//! Repertoire entry model.
//!
//! # Invariants
//! - `kind` is always `EntryType::Repertoire`, serialized as `"repertorio"`.
//! - Title and description are stored verbatim; duplicates are allowed.

use super::timestamp::{iso_millis, truncate_to_millis};
use super::Timestamped;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator persisted in the `type` field of every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "repertorio")]
    Repertoire,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repertoire => "repertorio",
        }
    }
}

/// User-supplied part of an entry, as captured by the add-item form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEntry {
    pub title: String,
    pub description: String,
}

impl NewEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One persisted repertoire record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub description: String,
    /// Serialized as `type` to match the persisted blob.
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Builds a repertoire entry stamped with `created_at`.
    pub fn repertoire(input: NewEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            title: input.title,
            description: input.description,
            kind: EntryType::Repertoire,
            created_at: truncate_to_millis(created_at),
        }
    }
}

impl Timestamped for Entry {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
