//! Wire types shared between the API layer and widget state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A tag as the server returns it: opaque id plus display name.
/// Immutable once created; name uniqueness is enforced server-side.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// One row of a record's current-tags listing: the association link id and
/// the tag it points at.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TagAssociationRow {
    pub association_id: String,
    pub tag: Tag,
}

/// Cross-widget message published when the user asks to see everything
/// sharing a tag. Transient; one instance per publish, never persisted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelatedEvent {
    pub tag_id: String,
    pub tag_label: String,
}

/// Raw records-by-tag response: object type name mapped to raw rows, each
/// row carrying an `id` field plus at least one display field. Group and
/// row order are the server's; `serde_json`'s `preserve_order` feature keeps
/// the map in arrival order.
pub type RelatedGroups = serde_json::Map<String, serde_json::Value>;
