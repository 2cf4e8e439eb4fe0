//! Message store.
//!
//! # Responsibility
//! - Hold the ordered messages for the session.
//! - Validate and attribute outgoing messages, persist under `mensajes`,
//!   re-render after every send.
//!
//! # Invariants
//! - Blank recipient or text never reaches memory, storage or the view.
//! - Sender comes from the session identity, falling back to `"yo"`.

use super::error::{DeserializationError, StoreError, StoreResult};
use super::persisted::PersistedList;
use super::{StoreOptions, MESSAGES_KEY};
use crate::clock::Clock;
use crate::model::message::{Message, MessageDraft, OutgoingMessage};
use crate::session::{resolve_sender, IdentityProvider};
use crate::storage::kv::KeyValueStorage;
use crate::view::date::DateDisplay;
use crate::view::list_view::ListView;
use crate::view::RenderTarget;
use log::{debug, info};

pub struct MessageStore<S, R> {
    list: PersistedList<Message, S>,
    target: R,
    identity: Box<dyn IdentityProvider>,
    clock: Box<dyn Clock>,
    dates: DateDisplay,
}

impl<S: KeyValueStorage, R: RenderTarget> MessageStore<S, R> {
    /// Loads persisted messages and renders them into `target`.
    pub fn load(
        storage: S,
        target: R,
        identity: impl IdentityProvider + 'static,
    ) -> StoreResult<Self> {
        Self::load_with(storage, target, identity, StoreOptions::default())
    }

    pub fn load_with(
        storage: S,
        target: R,
        identity: impl IdentityProvider + 'static,
        options: StoreOptions,
    ) -> StoreResult<Self> {
        let list = PersistedList::load(MESSAGES_KEY, storage)?;
        let mut store = Self {
            list,
            target,
            identity: Box::new(identity),
            clock: options.clock,
            dates: options.dates,
        };
        store.render();
        Ok(store)
    }

    /// Messages in send order.
    pub fn messages(&self) -> &[Message] {
        self.list.items()
    }

    /// Validates, attributes, appends, persists and re-renders a message.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `recipient` or `text` is blank; the
    ///   store is left untouched.
    /// - `StoreError::Storage` when the write fails; the message is kept in
    ///   memory and rendered.
    pub fn send(&mut self, recipient: &str, text: &str) -> StoreResult<Message> {
        let outgoing = match OutgoingMessage::parse(recipient, text) {
            Ok(outgoing) => outgoing,
            Err(err) => {
                info!(
                    "event=message_send module=store status=rejected key={MESSAGES_KEY} error={err}"
                );
                return Err(err.into());
            }
        };

        let sender = resolve_sender(self.identity.as_ref());
        let message =
            outgoing.into_message(sender, self.list.next_timestamp(self.clock.as_ref()));
        let persisted = self.list.push(message.clone());
        self.render();
        persisted.map(|()| message)
    }

    /// Sends the form contents and clears the form once the message was
    /// accepted. A rejected draft is left as typed.
    pub fn send_draft(&mut self, draft: &mut MessageDraft) -> StoreResult<Message> {
        let result = self.send(&draft.recipient, &draft.text);
        if !matches!(result, Err(StoreError::Validation(_))) {
            draft.reset();
        }
        result
    }

    /// Rebuilds the view from memory and pushes it to the render target.
    pub fn render(&mut self) -> ListView {
        let view = self.view();
        self.target.replace_content(&view.to_html());
        debug!(
            "event=store_render module=store status=ok key={MESSAGES_KEY} cards={}",
            view.len()
        );
        view
    }

    pub fn view(&self) -> ListView {
        ListView::of_messages(self.messages(), &self.dates)
    }

    pub fn persist(&mut self) -> StoreResult<()> {
        self.list.persist()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.list.has_unsaved_changes()
    }

    pub fn load_issue(&self) -> Option<&DeserializationError> {
        self.list.load_issue()
    }

    pub fn target(&self) -> &R {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::MessageStore;
    use crate::model::message::MessageDraft;
    use crate::session::StaticIdentity;
    use crate::storage::memory_kv::MemoryKeyValueStorage;
    use crate::store::error::StoreError;
    use crate::view::MemoryRenderTarget;

    #[test]
    fn rejected_draft_is_kept_and_accepted_draft_is_cleared() {
        let storage = MemoryKeyValueStorage::new();
        let mut store =
            MessageStore::load(&storage, MemoryRenderTarget::new(), StaticIdentity::anonymous())
                .unwrap();

        let mut draft = MessageDraft::new("ana", "   ");
        let err = store.send_draft(&mut draft).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(draft, MessageDraft::new("ana", "   "));

        draft.text = "Hola".to_string();
        store.send_draft(&mut draft).unwrap();
        assert!(draft.is_empty());
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn stored_fields_are_trimmed() {
        let storage = MemoryKeyValueStorage::new();
        let mut store =
            MessageStore::load(&storage, MemoryRenderTarget::new(), StaticIdentity::new("luis"))
                .unwrap();

        let message = store.send("  ana ", " Hola ").unwrap();
        assert_eq!(message.sender, "luis");
        assert_eq!(message.recipient, "ana");
        assert_eq!(message.text, "Hola");
    }
}
