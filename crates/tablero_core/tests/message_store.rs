use chrono::{DateTime, FixedOffset, Utc};
use tablero_core::{
    DateDisplay, FixedClock, KeyValueStorage, MemoryKeyValueStorage, MemoryRenderTarget,
    MessageStore, StaticIdentity, StoreError, StoreOptions, ValidationError, FALLBACK_SENDER,
    MESSAGES_KEY,
};

fn anonymous_store(
    storage: &MemoryKeyValueStorage,
) -> MessageStore<&MemoryKeyValueStorage, MemoryRenderTarget> {
    MessageStore::load(storage, MemoryRenderTarget::new(), StaticIdentity::anonymous()).unwrap()
}

#[test]
fn whitespace_only_text_is_rejected_without_side_effects() {
    let storage = MemoryKeyValueStorage::new();
    let mut store = anonymous_store(&storage);
    let renders_before = store.target().render_count();

    let err = store.send("ana", "  ").unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::BlankField { field: "text" })
    ));
    assert!(store.messages().is_empty());
    assert_eq!(storage.get_item(MESSAGES_KEY).unwrap(), None);
    assert_eq!(store.target().render_count(), renders_before);
}

#[test]
fn blank_recipient_is_rejected() {
    let storage = MemoryKeyValueStorage::new();
    let mut store = anonymous_store(&storage);

    let err = store.send("\t", "Hola").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::BlankField { field: "recipient" })
    ));
    assert!(store.messages().is_empty());
}

#[test]
fn missing_identity_sends_as_fallback() {
    let storage = MemoryKeyValueStorage::new();
    let mut store = anonymous_store(&storage);

    let message = store.send("ana", "Hola").unwrap();

    assert_eq!(message.sender, FALLBACK_SENDER);
    assert_eq!(message.sender, "yo");
    assert_eq!(store.messages(), &[message]);
}

#[test]
fn session_identity_is_used_as_sender() {
    let storage = MemoryKeyValueStorage::new();
    let mut store =
        MessageStore::load(&storage, MemoryRenderTarget::new(), StaticIdentity::new("maria"))
            .unwrap();

    assert_eq!(store.send("ana", "Hola").unwrap().sender, "maria");
}

#[test]
fn messages_round_trip_through_a_fresh_load() {
    let storage = MemoryKeyValueStorage::new();
    let mut store = anonymous_store(&storage);
    store.send("ana", "Hola").unwrap();
    store.send("luis", "¿Qué tal?").unwrap();

    let reloaded = anonymous_store(&storage);
    assert_eq!(reloaded.messages(), store.messages());
}

#[test]
fn rows_show_sender_recipient_text_and_local_time() {
    let storage = MemoryKeyValueStorage::new();
    let sent_at: DateTime<Utc> = "2024-05-01T22:15:30Z".parse().unwrap();
    let options = StoreOptions::default()
        .with_clock(FixedClock(sent_at))
        .with_dates(DateDisplay::new(
            FixedOffset::east_opt(2 * 3600).unwrap(),
            "%d/%m/%Y",
            "%d/%m/%Y, %H:%M:%S",
        )
        .unwrap());
    let mut store = MessageStore::load_with(
        &storage,
        MemoryRenderTarget::new(),
        StaticIdentity::new("maria"),
        options,
    )
    .unwrap();

    store.send("ana", "Hola <3").unwrap();
    let markup = store.target().content();

    assert!(markup.contains("<strong>De:</strong> maria <strong>Para:</strong> ana<br>"));
    assert!(markup.contains("<p>Hola &lt;3</p>"));
    assert!(markup.contains("<small>02/05/2024, 00:15:30</small>"));
}

#[test]
fn empty_panel_shows_placeholder() {
    let storage = MemoryKeyValueStorage::new();
    let mut store = anonymous_store(&storage);

    assert!(store.render().is_empty_state());
    assert!(store.target().content().contains("No hay mensajes aún"));
}
