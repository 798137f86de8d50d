use super::*;

fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

fn state_with_current(tags: &[(&str, &str)]) -> TagsState {
    let mut state = TagsState::default();
    state.set_current_tags(tags.iter().map(|(id, name)| tag(id, name)).collect());
    state
}

// =============================================================
// query_decision
// =============================================================

#[test]
fn empty_or_whitespace_query_clears_suggestions() {
    assert_eq!(TagsState::query_decision(""), QueryDecision::ClearSuggestions);
    assert_eq!(TagsState::query_decision("   "), QueryDecision::ClearSuggestions);
}

#[test]
fn queries_shorter_than_three_chars_do_not_search() {
    assert_eq!(TagsState::query_decision("U"), QueryDecision::TooShort);
    assert_eq!(TagsState::query_decision("Ur"), QueryDecision::TooShort);
    assert_eq!(TagsState::query_decision("  Ur  "), QueryDecision::TooShort);
}

#[test]
fn queries_of_three_or_more_chars_search_trimmed_text() {
    assert_eq!(
        TagsState::query_decision(" Urg "),
        QueryDecision::Search("Urg".to_owned())
    );
    assert_eq!(
        TagsState::query_decision("urgent"),
        QueryDecision::Search("urgent".to_owned())
    );
}

// =============================================================
// search results
// =============================================================

#[test]
fn current_tags_are_filtered_out_of_suggestions() {
    // Current tags = [T1 "Urgent"]; search for "Urg" returns T1 and T2.
    let mut state = state_with_current(&[("T1", "Urgent")]);
    let seq = state.begin_search();
    assert!(state.apply_search_results(seq, vec![tag("T1", "Urgent"), tag("T2", "Urgency")]));
    assert_eq!(
        state.suggestions,
        [Suggestion {
            id: "T2".to_owned(),
            label: "Urgency".to_owned()
        }]
    );
}

#[test]
fn duplicate_ids_within_one_batch_are_deduplicated() {
    let mut state = TagsState::default();
    let seq = state.begin_search();
    state.apply_search_results(seq, vec![tag("T2", "Urgency"), tag("T2", "Urgency")]);
    assert_eq!(state.suggestions.len(), 1);
}

#[test]
fn stale_search_results_are_dropped() {
    let mut state = TagsState::default();
    let first = state.begin_search();
    let second = state.begin_search();

    // The older search's response arrives after the newer one's.
    assert!(state.apply_search_results(second, vec![tag("T2", "Urgency")]));
    assert!(!state.apply_search_results(first, vec![tag("T9", "Stale")]));
    assert_eq!(state.suggestions[0].id, "T2");
    assert_eq!(state.suggestions.len(), 1);
}

// =============================================================
// commit_action
// =============================================================

#[test]
fn commit_with_exactly_one_candidate_attaches_it() {
    let mut state = TagsState::default();
    state.query = "Urg".to_owned();
    let seq = state.begin_search();
    state.apply_search_results(seq, vec![tag("T2", "Urgency")]);
    assert_eq!(state.commit_action(), CommitAction::Attach("T2".to_owned()));
}

#[test]
fn commit_with_zero_candidates_creates_from_typed_text() {
    let mut state = TagsState::default();
    state.query = " New Tag ".to_owned();
    assert_eq!(state.commit_action(), CommitAction::Create("New Tag".to_owned()));
}

#[test]
fn commit_with_multiple_candidates_does_nothing() {
    let mut state = TagsState::default();
    state.query = "Urg".to_owned();
    let seq = state.begin_search();
    state.apply_search_results(seq, vec![tag("T2", "Urgency"), tag("T3", "Urgently")]);
    assert_eq!(state.commit_action(), CommitAction::Ignore);
}

#[test]
fn commit_with_empty_query_and_no_candidates_does_nothing() {
    let state = TagsState::default();
    assert_eq!(state.commit_action(), CommitAction::Ignore);
}

// =============================================================
// refresh round-trip
// =============================================================

#[test]
fn refresh_after_attach_contains_the_new_tag() {
    let mut state = state_with_current(&[("T1", "Urgent")]);
    // Server now reports both tags.
    state.set_current_tags(vec![tag("T1", "Urgent"), tag("T2", "Urgency")]);
    assert!(state.current_ids.contains("T2"));
    assert_eq!(state.current.len(), 2);
}

#[test]
fn refresh_after_detach_drops_the_tag_and_its_id() {
    let mut state = state_with_current(&[("T1", "Urgent"), ("T2", "Urgency")]);
    state.set_current_tags(vec![tag("T1", "Urgent")]);
    assert!(!state.current_ids.contains("T2"));
    assert_eq!(state.current.len(), 1);
}

#[test]
fn refresh_resets_pill_statuses() {
    let mut state = state_with_current(&[("T1", "Urgent")]);
    state.mark_removing("T1");
    state.set_current_tags(vec![tag("T1", "Urgent")]);
    assert_eq!(state.current[0].status, PillStatus::Normal);
}

// =============================================================
// pill removal state machine
// =============================================================

#[test]
fn removal_marks_pending_then_reverts_on_failure() {
    let mut state = state_with_current(&[("T1", "Urgent")]);
    state.mark_removing("T1");
    assert_eq!(state.current[0].status, PillStatus::PendingRemoval);

    state.revert_removal("T1");
    assert_eq!(state.current[0].status, PillStatus::FailedRevert);
}

#[test]
fn marking_an_unknown_tag_is_a_no_op() {
    let mut state = state_with_current(&[("T1", "Urgent")]);
    state.mark_removing("T9");
    assert_eq!(state.current[0].status, PillStatus::Normal);
}

// =============================================================
// clearing
// =============================================================

#[test]
fn clear_query_empties_text_and_suggestions() {
    let mut state = TagsState::default();
    state.query = "Urg".to_owned();
    let seq = state.begin_search();
    state.apply_search_results(seq, vec![tag("T2", "Urgency")]);

    state.clear_query();
    assert!(state.query.is_empty());
    assert!(state.suggestions.is_empty());
}

#[test]
fn search_results_arriving_after_clear_query_are_dropped() {
    // Selection/create clears the box while a search is still in flight; its
    // response must not bring suggestions back.
    let mut state = TagsState::default();
    state.query = "Urg".to_owned();
    let seq = state.begin_search();

    state.clear_query();
    assert!(!state.apply_search_results(seq, vec![tag("T2", "Urgency")]));
    assert!(state.suggestions.is_empty());
}

#[test]
fn search_results_arriving_after_clear_suggestions_are_dropped() {
    let mut state = TagsState::default();
    let seq = state.begin_search();

    state.clear_suggestions();
    assert!(!state.apply_search_results(seq, vec![tag("T2", "Urgency")]));
    assert!(state.suggestions.is_empty());
}
