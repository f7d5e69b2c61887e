//! Password strength meter shown on the sign-up tab

use leptos::prelude::*;
use solofit_core::AuthForm;

/// Element id the password input refers to via `aria-describedby`.
pub const STRENGTH_METER_ID: &str = "password-strength";

/// Label and progress bar for the current password. Hidden while empty.
#[component]
pub fn StrengthMeter(form: RwSignal<AuthForm>) -> impl IntoView {
    let score = Memo::new(move |_| form.with(AuthForm::strength));
    let has_password = Memo::new(move |_| form.with(|f| !f.password().is_empty()));

    view! {
        <Show when=move || has_password.get()>
            <div id=STRENGTH_METER_ID class="strength" aria-live="polite">
                <div class="strength-header">
                    <span class="strength-caption">"Password Strength:"</span>
                    <span class=move || format!("strength-label {}", score.get().band().css_class())>
                        {move || score.get().band().label()}
                    </span>
                </div>
                <div
                    class="progress"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || score.get().value().to_string()
                >
                    <div
                        class="progress-fill"
                        style=move || {
                            let score = score.get();
                            format!(
                                "width: {}%; background-color: {};",
                                score.value(),
                                score.band().color()
                            )
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
