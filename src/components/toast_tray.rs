//! Toast tray rendering the shared notification queue.

use leptos::prelude::*;

use crate::state::toasts::{ToastSeverity, ToastState};

#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.severity {
                            ToastSeverity::Info => "toast toast--info",
                            ToastSeverity::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__title">{toast.title.clone()}</span>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
