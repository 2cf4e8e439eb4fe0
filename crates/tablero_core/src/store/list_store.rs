//! Repertoire store.
//!
//! # Responsibility
//! - Hold the ordered repertoire entries for the session.
//! - Persist under `repertorio` and re-render after every append.
//!
//! # Invariants
//! - Every entry carries `type = "repertorio"`.
//! - Entry titles are not unique; duplicates are appended as-is.

use super::error::{DeserializationError, StoreResult};
use super::persisted::PersistedList;
use super::{StoreOptions, REPERTOIRE_KEY};
use crate::clock::Clock;
use crate::model::entry::{Entry, NewEntry};
use crate::storage::kv::KeyValueStorage;
use crate::view::date::DateDisplay;
use crate::view::list_view::ListView;
use crate::view::RenderTarget;
use log::debug;

pub struct ListStore<S, R> {
    list: PersistedList<Entry, S>,
    target: R,
    clock: Box<dyn Clock>,
    dates: DateDisplay,
}

impl<S: KeyValueStorage, R: RenderTarget> ListStore<S, R> {
    /// Loads persisted entries and renders them into `target`.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the storage area cannot be read.
    ///   Absent or malformed blobs are not errors; see `load_issue`.
    pub fn load(storage: S, target: R) -> StoreResult<Self> {
        Self::load_with(storage, target, StoreOptions::default())
    }

    pub fn load_with(storage: S, target: R, options: StoreOptions) -> StoreResult<Self> {
        let list = PersistedList::load(REPERTOIRE_KEY, storage)?;
        let mut store = Self {
            list,
            target,
            clock: options.clock,
            dates: options.dates,
        };
        store.render();
        Ok(store)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        self.list.items()
    }

    /// Stamps, appends, persists and re-renders one entry.
    ///
    /// Returns the stored entry. On `StoreError::Storage` the entry is
    /// still appended and rendered, and `has_unsaved_changes` is true.
    pub fn append(&mut self, input: NewEntry) -> StoreResult<Entry> {
        let entry = Entry::repertoire(input, self.list.next_timestamp(self.clock.as_ref()));
        let persisted = self.list.push(entry.clone());
        self.render();
        persisted.map(|()| entry)
    }

    /// Rebuilds the view from memory and pushes it to the render target.
    pub fn render(&mut self) -> ListView {
        let view = self.view();
        self.target.replace_content(&view.to_html());
        debug!(
            "event=store_render module=store status=ok key={REPERTOIRE_KEY} cards={}",
            view.len()
        );
        view
    }

    /// Current view without touching the render target.
    pub fn view(&self) -> ListView {
        ListView::of_entries(self.entries(), &self.dates)
    }

    /// Rewrites the blob from memory, e.g. after a failed append.
    pub fn persist(&mut self) -> StoreResult<()> {
        self.list.persist()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.list.has_unsaved_changes()
    }

    /// Decoding problem met at load time, if any.
    pub fn load_issue(&self) -> Option<&DeserializationError> {
        self.list.load_issue()
    }

    pub fn target(&self) -> &R {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::ListStore;
    use crate::clock::FixedClock;
    use crate::model::entry::NewEntry;
    use crate::storage::memory_kv::MemoryKeyValueStorage;
    use crate::store::StoreOptions;
    use crate::view::MemoryRenderTarget;

    #[test]
    fn stalled_clock_still_yields_increasing_timestamps() {
        let storage = MemoryKeyValueStorage::new();
        let options =
            StoreOptions::default().with_clock(FixedClock("2024-05-01T09:30:00Z".parse().unwrap()));
        let mut store = ListStore::load_with(&storage, MemoryRenderTarget::new(), options).unwrap();

        let first = store.append(NewEntry::new("a", "")).unwrap();
        let second = store.append(NewEntry::new("b", "")).unwrap();

        assert!(first.created_at < second.created_at);
        assert_eq!((second.created_at - first.created_at).num_milliseconds(), 1);
    }

    #[test]
    fn load_renders_once_and_append_renders_again() {
        let storage = MemoryKeyValueStorage::new();
        let mut store = ListStore::load(&storage, MemoryRenderTarget::new()).unwrap();
        assert_eq!(store.target().render_count(), 1);

        store.append(NewEntry::new("Saludo", "Hola")).unwrap();
        assert_eq!(store.target().render_count(), 2);
        assert!(store.target().content().contains("<h4>Saludo</h4>"));
    }
}
