//! Landing page with a jump-to-record form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Home page — asks for an object type and record id, then opens the
/// record's tagging view.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let object_type = RwSignal::new(String::new());
    let record_id = RwSignal::new(String::new());

    let open = Callback::new(move |()| {
        let object_type = object_type.get();
        let record_id = record_id.get();
        if object_type.trim().is_empty() || record_id.trim().is_empty() {
            return;
        }
        navigate(
            &format!("/record/{}/{}", object_type.trim(), record_id.trim()),
            NavigateOptions::default(),
        );
    });

    view! {
        <div class="home-page">
            <h1>"Tagboard"</h1>
            <label class="home-page__label">
                "Object type"
                <input
                    type="text"
                    placeholder="e.g. account"
                    prop:value=move || object_type.get()
                    on:input=move |ev| object_type.set(event_target_value(&ev))
                />
            </label>
            <label class="home-page__label">
                "Record id"
                <input
                    type="text"
                    prop:value=move || record_id.get()
                    on:input=move |ev| record_id.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            open.run(());
                        }
                    }
                />
            </label>
            <button class="btn btn--primary" on:click=move |_| open.run(())>
                "Open record"
            </button>
        </div>
    }
}
