use super::*;

#[test]
fn tag_association_row_deserializes_nested_tag() {
    let row: TagAssociationRow = serde_json::from_value(serde_json::json!({
        "association_id": "a-1",
        "tag": { "id": "t-1", "name": "Urgent" }
    }))
    .expect("association row");
    assert_eq!(row.association_id, "a-1");
    assert_eq!(row.tag, Tag { id: "t-1".to_owned(), name: "Urgent".to_owned() });
}

#[test]
fn related_event_round_trips_through_json() {
    let event = RelatedEvent {
        tag_id: "t-1".to_owned(),
        tag_label: "Urgent".to_owned(),
    };
    let value = serde_json::to_value(&event).expect("serialize");
    let back: RelatedEvent = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, event);
}

#[test]
fn related_groups_preserve_server_order() {
    let groups: RelatedGroups = serde_json::from_str(
        r#"{ "work_order": [], "account": [], "case": [] }"#,
    )
    .expect("groups");
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, ["work_order", "account", "case"]);
}
