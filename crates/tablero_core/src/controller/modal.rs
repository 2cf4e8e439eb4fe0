//! Generic "add item" modal.
//!
//! # Responsibility
//! - Track which item kind the modal was opened for.
//! - Route repertoire submissions into the `ListStore` it was built with.
//! - Produce the success notification shown after a submit.
//!
//! # Invariants
//! - `submit` is only accepted while the modal is open.
//! - The modal is closed (and its kind cleared) after every accepted submit.
//! - Announcements and courses have no persistence backend; their submits
//!   are acknowledged but not stored.

use crate::model::entry::NewEntry;
use crate::storage::kv::KeyValueStorage;
use crate::store::error::StoreError;
use crate::store::list_store::ListStore;
use crate::view::RenderTarget;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Kind of item the modal was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Announcement,
    Course,
    Repertoire,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Announcement => "anuncio",
            Self::Course => "curso",
            Self::Repertoire => "repertorio",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "anuncio" => Some(Self::Announcement),
            "curso" => Some(Self::Course),
            "repertorio" => Some(Self::Repertoire),
            _ => None,
        }
    }

    /// Heading shown while the modal is open.
    pub fn modal_title(self) -> &'static str {
        match self {
            Self::Announcement => "Agregar Anuncio",
            Self::Course => "Agregar Curso",
            Self::Repertoire => "Agregar al Repertorio",
        }
    }

    /// Toast text shown after a successful submit.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Announcement => "Anuncio agregado exitosamente",
            Self::Course => "Curso agregado exitosamente",
            Self::Repertoire => "Mensaje agregado al repertorio",
        }
    }
}

/// Contents of the add-item form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddItemForm {
    pub title: String,
    pub description: String,
}

/// Outcome of an accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: ItemKind,
    pub message: &'static str,
    /// Whether the item was written to a store.
    pub stored: bool,
}

#[derive(Debug)]
pub enum ModalError {
    /// Submit arrived while the modal was closed.
    NotOpen,
    Store(StoreError),
}

impl Display for ModalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOpen => write!(f, "add-item modal is not open"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ModalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotOpen => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ModalError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub struct AddItemModal<'store, S, R> {
    repertoire: &'store mut ListStore<S, R>,
    current: Option<ItemKind>,
}

impl<'store, S: KeyValueStorage, R: RenderTarget> AddItemModal<'store, S, R> {
    pub fn new(repertoire: &'store mut ListStore<S, R>) -> Self {
        Self {
            repertoire,
            current: None,
        }
    }

    /// Opens the modal for `kind`, replacing any kind already open.
    pub fn open(&mut self, kind: ItemKind) {
        self.current = Some(kind);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_kind(&self) -> Option<ItemKind> {
        self.current
    }

    /// Heading of the open modal, if any.
    pub fn title(&self) -> Option<&'static str> {
        self.current.map(ItemKind::modal_title)
    }

    /// Submits the form for the open kind and closes the modal.
    ///
    /// # Errors
    /// - `ModalError::NotOpen` when nothing is open; state is unchanged.
    /// - `ModalError::Store` when the repertoire write fails. The entry is
    ///   still held by the store and the modal is closed.
    pub fn submit(&mut self, form: AddItemForm) -> Result<Notification, ModalError> {
        let kind = self.current.ok_or(ModalError::NotOpen)?;
        self.close();

        let stored = match kind {
            ItemKind::Repertoire => {
                self.repertoire
                    .append(NewEntry::new(form.title, form.description))?;
                true
            }
            ItemKind::Announcement | ItemKind::Course => false,
        };

        info!(
            "event=modal_submit module=controller status=ok kind={} stored={stored}",
            kind.as_str()
        );
        Ok(Notification {
            kind,
            message: kind.success_message(),
            stored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AddItemForm, AddItemModal, ItemKind, ModalError};
    use crate::storage::memory_kv::MemoryKeyValueStorage;
    use crate::store::list_store::ListStore;
    use crate::view::MemoryRenderTarget;

    fn form(title: &str) -> AddItemForm {
        AddItemForm {
            title: title.to_string(),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn repertoire_submit_reaches_the_injected_store() {
        let storage = MemoryKeyValueStorage::new();
        let mut store = ListStore::load(&storage, MemoryRenderTarget::new()).unwrap();

        let mut modal = AddItemModal::new(&mut store);
        modal.open(ItemKind::Repertoire);
        assert_eq!(modal.title(), Some("Agregar al Repertorio"));

        let notification = modal.submit(form("Saludo")).unwrap();
        assert_eq!(notification.message, "Mensaje agregado al repertorio");
        assert!(notification.stored);
        assert!(!modal.is_open());

        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].title, "Saludo");
    }

    #[test]
    fn announcement_submit_is_acknowledged_without_storing() {
        let storage = MemoryKeyValueStorage::new();
        let mut store = ListStore::load(&storage, MemoryRenderTarget::new()).unwrap();

        let mut modal = AddItemModal::new(&mut store);
        modal.open(ItemKind::Announcement);
        let notification = modal.submit(form("Aviso")).unwrap();

        assert_eq!(notification.message, "Anuncio agregado exitosamente");
        assert!(!notification.stored);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn submit_while_closed_is_rejected() {
        let storage = MemoryKeyValueStorage::new();
        let mut store = ListStore::load(&storage, MemoryRenderTarget::new()).unwrap();

        let mut modal = AddItemModal::new(&mut store);
        assert!(matches!(modal.submit(form("x")), Err(ModalError::NotOpen)));
    }

    #[test]
    fn item_kind_parses_wire_names() {
        for kind in [ItemKind::Announcement, ItemKind::Course, ItemKind::Repertoire] {
            assert_eq!(ItemKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ItemKind::parse("otro"), None);
    }
}
