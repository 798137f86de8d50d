//! Tag editor widget: current-tag pills, debounced autocomplete search, and
//! create-or-attach commit handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! All mutations go through the server and come back via a full refresh of
//! the current-tags list; the widget never patches its tag list locally.
//! Clicking a pill label publishes a show-related event on the bus and
//! nothing else — the related panel is free to exist or not.

use leptos::prelude::*;

use crate::bus::{self, PubSub};
use crate::net::api;
use crate::net::types::{RelatedEvent, Tag};
use crate::state::tags::{CommitAction, PillStatus, QueryDecision, TagsState};
use crate::state::toasts::ToastState;
use crate::util::debounce::{self, DebounceGate, SEARCH_DEBOUNCE_MS};

/// Tag editor for one host record. `page_key` scopes bus traffic to the
/// containing page instance.
#[component]
pub fn TagEditor(record_id: String, object_type: String, page_key: String) -> impl IntoView {
    let tags = expect_context::<RwSignal<TagsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pubsub = expect_context::<PubSub>();

    let gate = DebounceGate::new();

    // Initial load of the record's current tags.
    let requested_initial = RwSignal::new(false);
    let record_id_initial = record_id.clone();
    Effect::new(move || {
        if requested_initial.get() {
            return;
        }
        requested_initial.set(true);
        let record_id = record_id_initial.clone();
        leptos::task::spawn_local(refresh_current_tags(record_id, tags, toasts));
    });

    let gate_input = gate.clone();
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        tags.update(|s| s.query = text.clone());
        match TagsState::query_decision(&text) {
            QueryDecision::ClearSuggestions => {
                gate_input.cancel();
                tags.update(|s| s.clear_suggestions());
            }
            QueryDecision::TooShort => gate_input.cancel(),
            QueryDecision::Search(query) => {
                debounce::schedule(&gate_input, SEARCH_DEBOUNCE_MS, move || {
                    let seq = tags.try_update(TagsState::begin_search).unwrap_or_default();
                    leptos::task::spawn_local(run_search(query, seq, tags));
                });
            }
        }
    };

    let gate_commit = gate.clone();
    let record_id_commit = record_id.clone();
    let object_type_commit = object_type.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        // A commit supersedes any search still waiting out its quiet period.
        gate_commit.cancel();
        match tags.get_untracked().commit_action() {
            CommitAction::Attach(tag_id) => leptos::task::spawn_local(attach_and_refresh(
                tag_id,
                record_id_commit.clone(),
                object_type_commit.clone(),
                tags,
                toasts,
            )),
            CommitAction::Create(name) => leptos::task::spawn_local(create_and_refresh(
                name,
                record_id_commit.clone(),
                object_type_commit.clone(),
                tags,
                toasts,
            )),
            CommitAction::Ignore => {}
        }
    };

    let record_id_pick = record_id.clone();
    let object_type_pick = object_type.clone();
    let pick_suggestion = Callback::new(move |tag_id: String| {
        leptos::task::spawn_local(attach_and_refresh(
            tag_id,
            record_id_pick.clone(),
            object_type_pick.clone(),
            tags,
            toasts,
        ));
    });

    let record_id_remove = record_id.clone();
    let remove_tag = Callback::new(move |tag_id: String| {
        tags.update(|s| s.mark_removing(&tag_id));
        leptos::task::spawn_local(detach_and_refresh(
            tag_id,
            record_id_remove.clone(),
            tags,
            toasts,
        ));
    });

    let show_related = Callback::new(move |(tag_id, tag_label): (String, String)| {
        tags.update(|s| s.select_tag(&tag_id));
        let event = RelatedEvent { tag_id, tag_label };
        if let Ok(payload) = serde_json::to_value(&event) {
            pubsub.publish(&page_key, bus::TOPIC_SHOW_RELATED, &payload);
        }
    });

    view! {
        <div class="tag-editor">
            <div class="tag-editor__pills">
                {move || {
                    tags.get()
                        .current
                        .into_iter()
                        .map(|pill| {
                            let id_related = pill.id.clone();
                            let id_remove = pill.id.clone();
                            let label_related = pill.label.clone();
                            view! {
                                <span class=pill_class(pill.status)>
                                    <button
                                        class="tag-editor__pill-label"
                                        on:click=move |_| {
                                            show_related.run((id_related.clone(), label_related.clone()));
                                        }
                                    >
                                        {pill.label.clone()}
                                    </button>
                                    <button
                                        class="tag-editor__pill-remove"
                                        title="Remove tag"
                                        on:click=move |_| remove_tag.run(id_remove.clone())
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <input
                class="tag-editor__input"
                type="text"
                placeholder="Add a tag..."
                prop:value=move || tags.get().query
                on:input=on_input
                on:keydown=on_keydown
            />

            <Show when=move || !tags.get().suggestions.is_empty()>
                <ul class="tag-editor__suggestions">
                    {move || {
                        tags.get()
                            .suggestions
                            .into_iter()
                            .map(|suggestion| {
                                let id = suggestion.id.clone();
                                view! {
                                    <li>
                                        <button
                                            class="tag-editor__suggestion"
                                            on:click=move |_| pick_suggestion.run(id.clone())
                                        >
                                            {suggestion.label.clone()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}

fn pill_class(status: PillStatus) -> &'static str {
    match status {
        PillStatus::Normal => "tag-editor__pill",
        PillStatus::PendingRemoval => "tag-editor__pill tag-editor__pill--fading",
        PillStatus::FailedRevert => "tag-editor__pill tag-editor__pill--revert",
    }
}

/// Rebuild the current-tags list from the server. Failure is reportable:
/// the displayed list's correctness depends on this call.
async fn refresh_current_tags(
    record_id: String,
    tags: RwSignal<TagsState>,
    toasts: RwSignal<ToastState>,
) {
    match api::list_tags_for_record(&record_id).await {
        Ok(rows) => {
            let current: Vec<Tag> = rows.into_iter().map(|r| r.tag).collect();
            tags.update(|s| s.set_current_tags(current));
        }
        Err(e) => {
            leptos::logging::warn!("tag refresh failed: {e}");
            toasts.update(|t| {
                t.push_error(&e);
            });
        }
    }
}

/// Issue the debounced search. Failure degrades silently: the suggestions
/// were never shown, so there is nothing to report.
async fn run_search(query: String, seq: u64, tags: RwSignal<TagsState>) {
    match api::search_tags(&query).await {
        Ok(results) => tags.update(|s| {
            s.apply_search_results(seq, results);
        }),
        Err(e) => leptos::logging::warn!("tag search failed: {e}"),
    }
}

async fn attach_and_refresh(
    tag_id: String,
    record_id: String,
    object_type: String,
    tags: RwSignal<TagsState>,
    toasts: RwSignal<ToastState>,
) {
    match api::attach_tag(&tag_id, &record_id, &object_type).await {
        Ok(()) => {
            tags.update(TagsState::clear_query);
            refresh_current_tags(record_id, tags, toasts).await;
        }
        // Nothing was optimistically applied, so nothing to roll back.
        Err(e) => leptos::logging::warn!("tag attach failed: {e}"),
    }
}

async fn create_and_refresh(
    name: String,
    record_id: String,
    object_type: String,
    tags: RwSignal<TagsState>,
    toasts: RwSignal<ToastState>,
) {
    match api::create_tag_and_attach(&name, &record_id, &object_type).await {
        Ok(()) => {
            tags.update(TagsState::clear_query);
            refresh_current_tags(record_id, tags, toasts).await;
        }
        Err(e) => leptos::logging::warn!("tag create failed: {e}"),
    }
}

async fn detach_and_refresh(
    tag_id: String,
    record_id: String,
    tags: RwSignal<TagsState>,
    toasts: RwSignal<ToastState>,
) {
    match api::detach_tag(&tag_id, &record_id).await {
        Ok(()) => refresh_current_tags(record_id, tags, toasts).await,
        Err(e) => {
            leptos::logging::warn!("tag detach failed: {e}");
            tags.update(|s| s.revert_removal(&tag_id));
        }
    }
}
