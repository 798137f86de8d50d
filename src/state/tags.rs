//! Headless state machine for the tag editor widget.
//!
//! DESIGN
//! ======
//! The current-tags list and its id set are rebuilt wholesale from every
//! successful refresh; nothing here patches them locally after a mutation,
//! so displayed state can never drift from the server. Search results carry
//! the sequence number of the search that produced them; results from a
//! superseded search are dropped even if they arrive last.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use std::collections::HashSet;

use crate::net::types::Tag;

/// Minimum trimmed query length before a search is worth issuing.
pub const MIN_QUERY_LEN: usize = 3;

/// Removal state of a current-tag pill. `PendingRemoval` is the optimistic
/// fade shown while the detach call is in flight; `FailedRevert` is the
/// restored pill after a failed detach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PillStatus {
    #[default]
    Normal,
    PendingRemoval,
    FailedRevert,
}

/// A tag currently attached to the host record.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentTag {
    pub id: String,
    pub label: String,
    pub status: PillStatus,
}

/// A search candidate not yet attached to the host record. Lives for one
/// query cycle; discarded on clear or selection.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

/// What a new input value means for the search pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryDecision {
    /// Empty input: drop any visible suggestions, issue nothing.
    ClearSuggestions,
    /// 1–2 characters: too short to search, leave suggestions alone.
    TooShort,
    /// Trimmed text to search for.
    Search(String),
}

/// What commit intent (Enter) means given the candidate list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitAction {
    /// Exactly one candidate: attach it, never create.
    Attach(String),
    /// Zero candidates: create a tag with the typed text and attach it.
    Create(String),
    /// Two or more candidates, or nothing typed: do nothing.
    Ignore,
}

/// Tag editor state. Provided to the component tree as `RwSignal<TagsState>`.
#[derive(Clone, Debug, Default)]
pub struct TagsState {
    pub query: String,
    pub current: Vec<CurrentTag>,
    pub current_ids: HashSet<String>,
    pub suggestions: Vec<Suggestion>,
    pub selected_tag_id: Option<String>,
    search_seq: u64,
}

impl TagsState {
    /// Classify input text. Length is measured on the trimmed text.
    pub fn query_decision(text: &str) -> QueryDecision {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            QueryDecision::ClearSuggestions
        } else if trimmed.chars().count() < MIN_QUERY_LEN {
            QueryDecision::TooShort
        } else {
            QueryDecision::Search(trimmed.to_owned())
        }
    }

    /// Stamp a new search. Any results carrying an earlier sequence number
    /// are stale from this point on.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    /// Apply results for search `seq`. Tags already attached to the record
    /// are excluded, as is any duplicate id within the batch. Returns false
    /// if the results were stale and dropped.
    pub fn apply_search_results(&mut self, seq: u64, results: Vec<Tag>) -> bool {
        if seq != self.search_seq {
            return false;
        }
        let mut seen: HashSet<String> = HashSet::new();
        self.suggestions = results
            .into_iter()
            .filter(|t| !self.current_ids.contains(&t.id))
            .filter(|t| seen.insert(t.id.clone()))
            .map(|t| Suggestion { id: t.id, label: t.name })
            .collect();
        true
    }

    /// Decide what Enter does right now.
    pub fn commit_action(&self) -> CommitAction {
        match self.suggestions.as_slice() {
            [only] => CommitAction::Attach(only.id.clone()),
            [] => {
                let name = self.query.trim();
                if name.is_empty() {
                    CommitAction::Ignore
                } else {
                    CommitAction::Create(name.to_owned())
                }
            }
            _ => CommitAction::Ignore,
        }
    }

    /// Reset the input box and candidate list after a selection or create.
    /// Also invalidates any search still in flight, so a late response
    /// cannot repopulate the list under an empty input box.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clear_suggestions();
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.search_seq += 1;
    }

    /// Rebuild the current-tags list and id set from a successful refresh.
    /// This is the single source of truth; pill statuses reset to `Normal`.
    pub fn set_current_tags(&mut self, tags: Vec<Tag>) {
        self.current_ids = tags.iter().map(|t| t.id.clone()).collect();
        self.current = tags
            .into_iter()
            .map(|t| CurrentTag {
                id: t.id,
                label: t.name,
                status: PillStatus::Normal,
            })
            .collect();
    }

    /// Optimistically fade a pill while its detach call is in flight.
    pub fn mark_removing(&mut self, tag_id: &str) {
        self.set_status(tag_id, PillStatus::PendingRemoval);
    }

    /// Restore a pill whose detach call failed.
    pub fn revert_removal(&mut self, tag_id: &str) {
        self.set_status(tag_id, PillStatus::FailedRevert);
    }

    fn set_status(&mut self, tag_id: &str, status: PillStatus) {
        if let Some(pill) = self.current.iter_mut().find(|p| p.id == tag_id) {
            pill.status = status;
        }
    }

    /// Remember the tag last addressed for cross-widget events.
    pub fn select_tag(&mut self, tag_id: &str) {
        self.selected_tag_id = Some(tag_id.to_owned());
    }
}
