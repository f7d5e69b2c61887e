//! Email and password inputs bound to the auth form
//!
//! Both fields write straight into the shared [`AuthForm`] signal; the form
//! clears the field's error on every edit and ignores edits while busy.

use leptos::prelude::*;
use solofit_core::{AuthForm, AuthTab};

/// Join the ids an input is described by, or `None` when there are none.
#[must_use]
pub fn described_by(ids: &[Option<&str>]) -> Option<String> {
    let joined = ids.iter().flatten().copied().collect::<Vec<_>>().join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// `"true"` / `"false"` for `aria-*` boolean attributes.
#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Inline error under a field, rendered only while `message` is set.
#[component]
pub fn InlineError(id: String, message: Memo<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <p class="field-error" id=id.clone() role="alert">
                    <span class="field-error-icon" aria-hidden="true">"!"</span>
                    {text}
                </p>
            }
        })
    }
}

/// Email input with a check mark once the address looks valid.
#[component]
pub fn EmailField(form: RwSignal<AuthForm>, tab: AuthTab) -> impl IntoView {
    let input_id = format!("{}-email", tab.id_prefix());
    let error_id = format!("{input_id}-error");
    let error = Memo::new(move |_| form.with(|f| f.email_error().map(ToString::to_string)));
    let busy = Memo::new(move |_| form.with(AuthForm::is_busy));

    let error_ref = error_id.clone();
    let describe = move || {
        let has_error = error.get().is_some();
        described_by(&[has_error.then_some(error_ref.as_str())])
    };

    view! {
        <div class="field">
            <label class="field-label" for=input_id.clone()>
                <span class="field-icon" aria-hidden="true">"✉"</span>
                "Email"
            </label>
            <div class="field-control">
                <input
                    id=input_id
                    class="field-input"
                    class:invalid=move || error.get().is_some()
                    type="email"
                    placeholder="your@email.com"
                    autocomplete="email"
                    autocapitalize="off"
                    spellcheck="false"
                    required=true
                    aria-invalid=move || aria_bool(error.get().is_some())
                    aria-describedby=describe
                    disabled=move || busy.get()
                    prop:value=move || form.with(|f| f.email().to_string())
                    on:input=move |ev| {
                        form.update(|f| {
                            f.set_email(event_target_value(&ev));
                        });
                    }
                />
                <Show when=move || form.with(AuthForm::email_looks_valid)>
                    <span class="field-valid" aria-hidden="true">"✓"</span>
                </Show>
            </div>
            <InlineError id=error_id message=error />
        </div>
    }
}

/// Password input with a show / hide toggle.
///
/// `strength_id` names the strength meter this input is also described by.
#[component]
pub fn PasswordField(
    form: RwSignal<AuthForm>,
    tab: AuthTab,
    autocomplete: &'static str,
    #[prop(optional)] strength_id: Option<&'static str>,
) -> impl IntoView {
    let input_id = format!("{}-password", tab.id_prefix());
    let error_id = format!("{input_id}-error");
    let error = Memo::new(move |_| form.with(|f| f.password_error().map(ToString::to_string)));
    let busy = Memo::new(move |_| form.with(AuthForm::is_busy));
    let visible = Memo::new(move |_| form.with(AuthForm::show_password));

    let error_ref = error_id.clone();
    let describe = move || {
        let has_error = error.get().is_some();
        described_by(&[has_error.then_some(error_ref.as_str()), strength_id])
    };

    view! {
        <div class="field">
            <label class="field-label" for=input_id.clone()>
                <span class="field-icon" aria-hidden="true">"🔒"</span>
                "Password"
            </label>
            <div class="field-control">
                <input
                    id=input_id
                    class="field-input"
                    class:invalid=move || error.get().is_some()
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    autocomplete=autocomplete
                    required=true
                    aria-invalid=move || aria_bool(error.get().is_some())
                    aria-describedby=describe
                    disabled=move || busy.get()
                    prop:value=move || form.with(|f| f.password().to_string())
                    on:input=move |ev| {
                        form.update(|f| {
                            f.set_password(event_target_value(&ev));
                        });
                    }
                />
                <button
                    type="button"
                    class="field-toggle"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    disabled=move || busy.get()
                    on:click=move |_| {
                        form.update(|f| {
                            f.toggle_password_visibility();
                        });
                    }
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
            <InlineError id=error_id message=error />
        </div>
    }
}
