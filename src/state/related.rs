//! Headless state and transform for the related-records panel.
//!
//! DESIGN
//! ======
//! The service groups related records by object type; the panel shows one
//! flat list. The transform keeps the service's group and row order exactly
//! (no client-side sorting), resolves a display name per group, annotates
//! each row with its type and icon, and drops the subject record so nothing
//! ever lists itself as related.

#[cfg(test)]
#[path = "related_test.rs"]
mod related_test;

use crate::net::types::RelatedGroups;
use crate::util::icons;

/// Field that identifies a raw row. Every other field is display data.
const ID_FIELD: &str = "id";

/// A record sharing a tag with the subject, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct RelatedRecord {
    pub id: String,
    pub display_name: String,
    pub type_name: String,
    pub icon: &'static str,
}

impl RelatedRecord {
    /// Route to this record's page. The record route carries the object type
    /// as well as the id, matching the router's `/record/:object_type/:id`.
    pub fn path(&self) -> String {
        format!("/record/{}/{}", self.type_name, self.id)
    }
}

/// Related-records panel state. Provided as `RwSignal<RelatedState>`.
#[derive(Clone, Debug, Default)]
pub struct RelatedState {
    pub items: Vec<RelatedRecord>,
    pub tag_label: Option<String>,
}

impl RelatedState {
    /// Replace the displayed list after a successful fetch.
    pub fn set_related(&mut self, items: Vec<RelatedRecord>, tag_label: &str) {
        self.items = items;
        self.tag_label = Some(tag_label.to_owned());
    }

    /// Empty the panel. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
        self.tag_label = None;
    }
}

/// Flatten grouped raw rows into one ordered display list.
///
/// Per group, the display-name field is the first key of the group's first
/// row that is not the identity field. Rows without a string identity are
/// skipped; the row matching `subject_id` is excluded.
pub fn flatten_groups(groups: &RelatedGroups, subject_id: &str) -> Vec<RelatedRecord> {
    let mut flat = Vec::new();
    for (type_name, rows) in groups {
        let Some(rows) = rows.as_array() else {
            continue;
        };
        let name_field = rows
            .first()
            .and_then(serde_json::Value::as_object)
            .and_then(|first| first.keys().find(|k| k.as_str() != ID_FIELD))
            .cloned();
        let icon = icons::resolve(type_name);
        for row in rows {
            let Some(id) = row.get(ID_FIELD).and_then(serde_json::Value::as_str) else {
                continue;
            };
            if id == subject_id {
                continue;
            }
            let display_name = name_field
                .as_deref()
                .and_then(|f| row.get(f))
                .map(display_value)
                .unwrap_or_default();
            flat.push(RelatedRecord {
                id: id.to_owned(),
                display_name,
                type_name: type_name.clone(),
                icon,
            });
        }
    }
    flat
}

/// Render a raw field value for display without JSON quoting.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
