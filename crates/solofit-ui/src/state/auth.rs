//! Auth screen wiring between form state, provider and toasts
//!
//! Submits validate synchronously against [`AuthForm`]. An accepted request is
//! handed to the configured provider on the local executor and raced against
//! the request deadline. With no provider configured the request is only
//! logged and the form stays pending.

use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use solofit_core::{
    AuthForm, AuthOutcome, AuthProvider, AuthRequest, FormError, Notice, RequestKind,
    dispatch, dispatch_with_deadline,
};
use tracing::{debug, info};
use wasm_bindgen_futures::spawn_local;

use crate::state::toasts::Toaster;

/// Provider handle that can live in Leptos context.
pub type SharedProvider = Arc<dyn AuthProvider + Send + Sync>;

/// The authentication provider, if one is configured.
#[derive(Clone, Default)]
pub struct AuthBackend {
    provider: Option<SharedProvider>,
}

impl AuthBackend {
    #[must_use]
    pub const fn new(provider: Option<SharedProvider>) -> Self {
        Self { provider }
    }
}

/// Toast for a submit that local validation rejected.
///
/// Only password-reset problems are toasted; field errors render inline and
/// an in-flight rejection is silent.
#[must_use]
pub fn rejection_notice(result: &solofit_core::Result<AuthRequest>) -> Option<Notice> {
    match result {
        Err(FormError::Reset(err)) => Some(Notice::from(*err)),
        Ok(_) | Err(FormError::Field(_) | FormError::SubmissionInFlight) => None,
    }
}

/// Notice shown once a provider settles a request.
#[must_use]
pub fn outcome_notice(kind: RequestKind, outcome: &AuthOutcome) -> Notice {
    outcome.failure_reason().map_or_else(
        || match kind {
            RequestKind::SignIn => Notice::success("Welcome back", "You are signed in."),
            RequestKind::SignUp => Notice::success("Account created", "Your journey begins now."),
            RequestKind::ResetPassword => {
                Notice::success("Check your inbox", "A password reset link is on its way.")
            }
        },
        |reason| Notice::error("Something went wrong", reason),
    )
}

/// Handlers for the three auth screen actions.
#[derive(Clone)]
pub struct AuthActions {
    form: RwSignal<AuthForm>,
    toaster: Toaster,
    backend: AuthBackend,
    timeout_ms: u32,
}

impl AuthActions {
    #[must_use]
    pub const fn new(
        form: RwSignal<AuthForm>,
        toaster: Toaster,
        backend: AuthBackend,
        timeout_ms: u32,
    ) -> Self {
        Self {
            form,
            toaster,
            backend,
            timeout_ms,
        }
    }

    pub fn sign_in(&self) {
        if let Some(result) = self.form.try_update(AuthForm::submit_sign_in) {
            self.handle(result);
        }
    }

    pub fn sign_up(&self) {
        if let Some(result) = self.form.try_update(AuthForm::submit_sign_up) {
            self.handle(result);
        }
    }

    pub fn forgot_password(&self) {
        if let Some(result) = self.form.try_update(AuthForm::request_password_reset) {
            self.handle(result);
        }
    }

    fn handle(&self, result: solofit_core::Result<AuthRequest>) {
        if let Some(notice) = rejection_notice(&result) {
            self.toaster.push(notice);
        }
        match result {
            Ok(request) => self.submit(request),
            Err(err) => debug!(error = %err, "submit rejected"),
        }
    }

    fn submit(&self, request: AuthRequest) {
        let Some(provider) = self.backend.provider.clone() else {
            info!(kind = %request.kind(), "no authentication provider configured; request stays pending");
            return;
        };

        let form = self.form;
        let toaster = self.toaster;
        let deadline = TimeoutFuture::new(self.timeout_ms);
        spawn_local(async move {
            let kind = request.kind();
            let outcome = dispatch_with_deadline(dispatch(&*provider, &request), deadline).await;
            toaster.push(outcome_notice(kind, &outcome));
            form.try_update(|f| f.resolve(&outcome));
        });
    }
}
