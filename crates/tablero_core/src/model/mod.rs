//! Fixed-shape records persisted by the stores.
//!
//! # Responsibility
//! - Define repertoire entries and messages with their wire field names.
//! - Validate user input at the boundary where it enters a record.
//!
//! # Invariants
//! - Records are immutable once appended; there is no update path.
//! - `created_at` is set by the owning store, never by callers.

pub mod entry;
pub mod message;
pub mod timestamp;
pub mod validation;

use chrono::{DateTime, Utc};

/// Records that carry a store-assigned creation time.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}
