//! Related-records panel: display-only widget listing every record that
//! shares a tag with the subject.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel knows nothing about the tag editor. It subscribes to the
//! show-related topic on the page-scoped bus at setup and unsubscribes on
//! teardown; everything it displays arrives through that subscription.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::bus::{self, PubSub};
use crate::net::api;
use crate::net::types::RelatedEvent;
use crate::state::related::{RelatedState, flatten_groups};
use crate::state::toasts::ToastState;

/// Related-records panel for one host record. `page_key` must match the
/// editor's so both widgets share a bus scope.
#[component]
pub fn RelatedPanel(record_id: String, page_key: String) -> impl IntoView {
    let related = expect_context::<RwSignal<RelatedState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pubsub = expect_context::<PubSub>();
    let navigate = use_navigate();

    // Subscribe before the page context is announced; the bus defers the
    // registration and flushes it once the page checks in.
    let owner = uuid::Uuid::new_v4().to_string();
    let subject_id = record_id.clone();
    pubsub.subscribe(
        &page_key,
        bus::TOPIC_SHOW_RELATED,
        &owner,
        move |payload| {
            let Ok(event) = serde_json::from_value::<RelatedEvent>(payload.clone()) else {
                leptos::logging::warn!("malformed related event: {payload}");
                return;
            };
            leptos::task::spawn_local(load_related(event, subject_id.clone(), related, toasts));
        },
    );

    let pubsub_cleanup = pubsub.clone();
    on_cleanup(move || pubsub_cleanup.unsubscribe_all(&owner));

    let open_record = Callback::new(move |path: String| {
        navigate(&path, NavigateOptions::default());
    });

    view! {
        <div class="related-panel">
            <header class="related-panel__header">
                <span class="related-panel__title">
                    {move || {
                        related
                            .get()
                            .tag_label
                            .map_or_else(|| "Related records".to_owned(), |label| {
                                format!("Tagged \"{label}\"")
                            })
                    }}
                </span>
                <button
                    class="btn related-panel__clear"
                    on:click=move |_| related.update(RelatedState::clear)
                >
                    "Clear"
                </button>
            </header>

            <div class="related-panel__cards">
                {move || {
                    let items = related.get().items;
                    if items.is_empty() {
                        return view! {
                            <div class="related-panel__empty">"Nothing to show"</div>
                        }
                            .into_any();
                    }

                    items
                        .into_iter()
                        .map(|item| {
                            let path = item.path();
                            view! {
                                <button
                                    class="related-panel__card"
                                    on:click=move |_| open_record.run(path.clone())
                                >
                                    <span
                                        class="related-panel__icon"
                                        data-icon=item.icon
                                    ></span>
                                    <span class="related-panel__name">{item.display_name.clone()}</span>
                                    <span class="related-panel__type">{item.type_name.clone()}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// Fetch, transform, and display the records sharing `event.tag_id`. On
/// failure the displayed list is left untouched and the error is surfaced.
async fn load_related(
    event: RelatedEvent,
    subject_id: String,
    related: RwSignal<RelatedState>,
    toasts: RwSignal<ToastState>,
) {
    match api::find_records_by_tag(&event.tag_id).await {
        Ok(groups) => {
            let items = flatten_groups(&groups, &subject_id);
            related.update(|s| s.set_related(items, &event.tag_label));
        }
        Err(e) => {
            leptos::logging::warn!("related fetch failed: {e}");
            toasts.update(|t| {
                t.push_error(&e);
            });
        }
    }
}
