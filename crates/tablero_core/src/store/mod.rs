//! Local persisted list stores.
//!
//! # Responsibility
//! - Own the repertoire and message collections for one session.
//! - Keep the persisted blob and the rendered view in step with memory.
//!
//! # Invariants
//! - A store exists only after its collection was loaded.
//! - Mutation is append-only; every append rewrites the whole blob and
//!   re-renders.
//! - Storage failures never drop in-memory records.

pub mod error;
pub mod list_store;
pub mod message_store;
mod persisted;

use crate::clock::{Clock, SystemClock};
use crate::view::date::DateDisplay;

/// Storage key of the repertoire blob.
pub const REPERTOIRE_KEY: &str = "repertorio";
/// Storage key of the message blob.
pub const MESSAGES_KEY: &str = "mensajes";

/// Collaborators shared by both stores.
pub struct StoreOptions {
    pub clock: Box<dyn Clock>,
    pub dates: DateDisplay,
}

impl StoreOptions {
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_dates(mut self, dates: DateDisplay) -> Self {
        self.dates = dates;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock),
            dates: DateDisplay::default(),
        }
    }
}
