//! Full-width submit button with a busy state

use leptos::prelude::*;
use solofit_core::AuthForm;

/// Submit button that disables itself and swaps its label while busy.
#[component]
pub fn SubmitButton(
    form: RwSignal<AuthForm>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    let busy = Memo::new(move |_| form.with(AuthForm::is_busy));

    view! {
        <button
            type="submit"
            class="btn btn-primary btn-block"
            aria-busy=move || if busy.get() { "true" } else { "false" }
            disabled=move || busy.get()
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="btn-busy">
                            <span class="spinner" aria-hidden="true" />
                            {busy_label}
                        </span>
                    }
                        .into_any()
                } else {
                    label.into_any()
                }
            }}
        </button>
    }
}
