//! Local persisted list stores for the tablero board.
//! Repertoire entries and messages live in a key-value storage area and are
//! rendered through a swappable view boundary.

pub mod clock;
pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError, DisplayConfig};
pub use controller::modal::{AddItemForm, AddItemModal, ItemKind, ModalError, Notification};
pub use logging::{default_log_level, init_logging};
pub use model::entry::{Entry, EntryType, NewEntry};
pub use model::message::{Message, MessageDraft, OutgoingMessage};
pub use model::validation::ValidationError;
pub use session::{IdentityProvider, StaticIdentity, FALLBACK_SENDER};
pub use storage::kv::{KeyValueStorage, StorageError, StorageResult};
pub use storage::memory_kv::MemoryKeyValueStorage;
pub use storage::sqlite_kv::SqliteKeyValueStorage;
pub use store::error::{DeserializationError, StoreError, StoreResult};
pub use store::list_store::ListStore;
pub use store::message_store::MessageStore;
pub use store::{StoreOptions, MESSAGES_KEY, REPERTOIRE_KEY};
pub use view::date::{DateDisplay, InvalidDatePattern};
pub use view::list_view::{EmptyState, ItemCard, ListView};
pub use view::{MemoryRenderTarget, RenderTarget};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
