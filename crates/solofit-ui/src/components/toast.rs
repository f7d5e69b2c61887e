//! Toast viewport
//!
//! Renders the queue held by the [`crate::state::Toaster`] in context.

use leptos::prelude::*;

use crate::state::{Toast, use_toaster};

/// Fixed-position list of visible toasts. Click a toast to dismiss it.
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <ol class="toast-viewport" aria-live="polite">
            <For
                each=move || toaster.visible()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.notice.level.css_class());
                    view! {
                        <li class=class role="status" on:click=move |_| toaster.dismiss(id)>
                            <p class="toast-title">{toast.notice.title}</p>
                            <p class="toast-description">{toast.notice.description}</p>
                        </li>
                    }
                }
            />
        </ol>
    }
}
