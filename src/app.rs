//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::bus::PubSub;
use crate::pages::{home::HomePage, record::RecordPage};
use crate::state::related::RelatedState;
use crate::state::tags::TagsState;
use crate::state::toasts::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the widget state contexts and the shared event bus, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let tags = RwSignal::new(TagsState::default());
    let related = RwSignal::new(RelatedState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(tags);
    provide_context(related);
    provide_context(toasts);
    provide_context(PubSub::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/tagboard.css"/>
        <Title text="Tagboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(
                        StaticSegment("record"),
                        ParamSegment("object_type"),
                        ParamSegment("id"),
                    )
                    view=RecordPage
                />
            </Routes>
        </Router>
    }
}
