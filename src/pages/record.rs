//! Record page hosting the tag editor and the related-records panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page is the bus scope: both widgets subscribe/publish under a key
//! derived from the record id, and the page announces that key once the
//! widget tree is up. Widgets are rebuilt when the route's record changes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::bus::PubSub;
use crate::components::related_panel::RelatedPanel;
use crate::components::tag_editor::TagEditor;
use crate::components::toast_tray::ToastTray;
use crate::state::related::RelatedState;
use crate::state::tags::TagsState;

fn page_key(record_id: &str) -> String {
    format!("record:{record_id}")
}

/// Record page — reads object type and record id from the route and composes
/// the two tagging widgets plus the toast tray.
#[component]
pub fn RecordPage() -> impl IntoView {
    let tags = expect_context::<RwSignal<TagsState>>();
    let related = expect_context::<RwSignal<RelatedState>>();
    let pubsub = expect_context::<PubSub>();
    let params = use_params_map();

    let record_id = move || params.read().get("id").unwrap_or_default();
    let object_type = move || params.read().get("object_type").unwrap_or_default();

    // Reset widget state when navigating between records.
    Effect::new(move || {
        let _ = record_id();
        tags.update(|s| *s = TagsState::default());
        related.update(RelatedState::clear);
    });

    // Announce the page's bus scope. Effects run after the widget tree
    // renders, so widget subscriptions are deferred until this flushes them.
    let pubsub_announce = pubsub.clone();
    Effect::new(move || {
        pubsub_announce.announce_context(&page_key(&record_id()));
    });

    view! {
        <div class="record-page">
            <header class="record-page__header">
                <span class="record-page__type">{object_type}</span>
                <span class="record-page__id">{record_id}</span>
            </header>

            <div class="record-page__widgets">
                {move || {
                    let id = record_id();
                    let key = page_key(&id);
                    view! {
                        <TagEditor
                            record_id=id.clone()
                            object_type=object_type()
                            page_key=key.clone()
                        />
                        <RelatedPanel record_id=id page_key=key/>
                    }
                }}
            </div>

            <ToastTray/>
        </div>
    }
}
