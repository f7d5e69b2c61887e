//! Sign-in / sign-up page
//!
//! One [`AuthForm`] backs both tabs, so email and password survive a tab
//! switch. Validation errors render inline; password-reset problems go to the
//! toast surface.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use solofit_core::{AppConfig, AuthForm, AuthTab, RequestKind};

use crate::components::strength_meter::STRENGTH_METER_ID;
use crate::components::{EmailField, PasswordField, StrengthMeter, SubmitButton};
use crate::state::{AuthActions, AuthBackend, use_toaster};

/// Tabs in display order.
pub const TABS: [AuthTab; 2] = [AuthTab::SignIn, AuthTab::SignUp];

const FORGOT_PASSWORD_LABEL: &str = "Forgot password?";

/// Text of the forgot-password link, which reports a pending reset itself.
#[must_use]
pub fn forgot_password_label(form: &AuthForm) -> &'static str {
    match form.submission().pending_kind() {
        Some(kind @ RequestKind::ResetPassword) => kind.pending_label(),
        _ => FORGOT_PASSWORD_LABEL,
    }
}

/// Auth page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let backend = use_context::<AuthBackend>().unwrap_or_default();
    let form = RwSignal::new(AuthForm::new(config.auth.password_policy()));
    let actions = AuthActions::new(form, use_toaster(), backend, config.auth.request_timeout_ms);
    let advisory = form.with_untracked(|f| f.policy().advisory());

    let tab = Memo::new(move |_| form.with(AuthForm::tab));

    let sign_in = {
        let actions = actions.clone();
        Callback::new(move |()| actions.sign_in())
    };
    let sign_up = {
        let actions = actions.clone();
        Callback::new(move |()| actions.sign_up())
    };
    let forgot_password = Callback::new(move |()| actions.forgot_password());

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <header class="card-header">
                    <div class="auth-badge" aria-hidden="true">"🏋"</div>
                    <h1 class="card-title">"Enter the SoloFit Realm"</h1>
                    <p class="card-description">"Your journey to a better you starts here"</p>
                </header>

                <div class="card-content">
                    <div class="tabs" role="tablist">
                        {TABS
                            .into_iter()
                            .map(|t| view! { <TabTrigger form=form tab=t /> })
                            .collect_view()}
                    </div>

                    {move || match tab.get() {
                        AuthTab::SignIn => {
                            view! {
                                <SignInForm form=form on_submit=sign_in on_forgot=forgot_password />
                            }
                                .into_any()
                        }
                        AuthTab::SignUp => {
                            view! { <SignUpForm form=form on_submit=sign_up advisory=advisory.clone() /> }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// One tab button.
#[component]
fn TabTrigger(form: RwSignal<AuthForm>, tab: AuthTab) -> impl IntoView {
    let selected = Memo::new(move |_| form.with(|f| f.tab() == tab));

    view! {
        <button
            type="button"
            role="tab"
            class="tab"
            class:active=move || selected.get()
            aria-selected=move || if selected.get() { "true" } else { "false" }
            aria-label=format!("Switch to {} form", tab.label().to_lowercase())
            on:click=move |_| form.update(|f| f.select_tab(tab))
        >
            {tab.label()}
        </button>
    }
}

#[component]
fn SignInForm(
    form: RwSignal<AuthForm>,
    on_submit: Callback<()>,
    on_forgot: Callback<()>,
) -> impl IntoView {
    let busy = Memo::new(move |_| form.with(AuthForm::is_busy));
    let forgot_label = Memo::new(move |_| form.with(forgot_password_label));

    view! {
        <form
            class="auth-form"
            novalidate=true
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <EmailField form=form tab=AuthTab::SignIn />
            <PasswordField form=form tab=AuthTab::SignIn autocomplete="current-password" />

            <div class="auth-forgot">
                <button
                    type="button"
                    class="link-button"
                    disabled=move || busy.get()
                    on:click=move |_| on_forgot.run(())
                >
                    {move || forgot_label.get()}
                </button>
            </div>

            <SubmitButton
                form=form
                label="Sign In"
                busy_label=RequestKind::SignIn.pending_label()
            />
        </form>
    }
}

#[component]
fn SignUpForm(form: RwSignal<AuthForm>, on_submit: Callback<()>, advisory: String) -> impl IntoView {
    view! {
        <form
            class="auth-form"
            novalidate=true
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="alert alert-muted" role="note">
                <span class="alert-icon" aria-hidden="true">"!"</span>
                <p class="alert-description">{advisory}</p>
            </div>

            <EmailField form=form tab=AuthTab::SignUp />
            <div class="field-group">
                <PasswordField
                    form=form
                    tab=AuthTab::SignUp
                    autocomplete="new-password"
                    strength_id=STRENGTH_METER_ID
                />
                <StrengthMeter form=form />
            </div>

            <SubmitButton
                form=form
                label="Create Account"
                busy_label=RequestKind::SignUp.pending_label()
            />
        </form>
    }
}
