use chrono::{DateTime, Utc};
use tablero_core::{Entry, EntryType, Message, NewEntry, OutgoingMessage};

#[test]
fn entry_serialization_uses_expected_wire_fields() {
    let created_at: DateTime<Utc> = "2024-05-01T09:30:00.123Z".parse().unwrap();
    let entry = Entry::repertoire(NewEntry::new("Saludo", "Hola a todos"), created_at);

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["title"], "Saludo");
    assert_eq!(json["description"], "Hola a todos");
    assert_eq!(json["type"], "repertorio");
    assert_eq!(json["created_at"], "2024-05-01T09:30:00.123Z");
    assert_eq!(json.as_object().unwrap().len(), 4);

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn message_serialization_uses_expected_wire_fields() {
    let created_at: DateTime<Utc> = "2024-05-01T09:30:00Z".parse().unwrap();
    let message = OutgoingMessage::parse("ana", "Hola")
        .unwrap()
        .into_message("yo", created_at);

    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["sender"], "yo");
    assert_eq!(json["recipient"], "ana");
    assert_eq!(json["text"], "Hola");
    assert_eq!(json["created_at"], "2024-05-01T09:30:00.000Z");
}

#[test]
fn blobs_written_by_the_browser_page_decode() {
    let raw = r#"[
        {"title":"Saludo","description":"Hola","type":"repertorio","created_at":"2024-03-10T18:04:05.678Z"}
    ]"#;
    let entries: Vec<Entry> = serde_json::from_str(raw).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, EntryType::Repertoire);
    assert_eq!(entries[0].created_at.timestamp_subsec_millis(), 678);

    let raw = r#"[{"sender":"yo","recipient":"ana","text":"Hola","created_at":"2024-03-10T19:00:00+01:00"}]"#;
    let messages: Vec<Message> = serde_json::from_str(raw).unwrap();
    assert_eq!(
        messages[0].created_at,
        "2024-03-10T18:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[test]
fn unknown_entry_type_is_rejected() {
    let raw = r#"{"title":"a","description":"b","type":"anuncio","created_at":"2024-03-10T18:04:05.678Z"}"#;
    assert!(serde_json::from_str::<Entry>(raw).is_err());
}
