//! Seam to an external authentication provider.
//!
//! No provider ships with the front-end. When one is plugged in, the UI hands
//! each accepted [`AuthRequest`] to [`dispatch_with_deadline`] and feeds the
//! resulting [`AuthOutcome`] back into the form.

use std::future::Future;
use std::pin::pin;

use async_trait::async_trait;
use futures::future::{Either, select};
use tracing::warn;

use crate::error::AuthError;
use crate::submission::{AuthOutcome, AuthRequest};

/// Operations offered by an identity provider, keyed by email and password.
///
/// Futures are not `Send`: the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait AuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
}

/// Route `request` to the matching provider operation.
///
/// # Errors
///
/// Propagates whatever the provider reports.
pub async fn dispatch(provider: &dyn AuthProvider, request: &AuthRequest) -> Result<(), AuthError> {
    match request {
        AuthRequest::SignIn { email, password } => provider.sign_in(email, password).await,
        AuthRequest::SignUp { email, password } => provider.sign_up(email, password).await,
        AuthRequest::ResetPassword { email } => provider.reset_password(email).await,
    }
}

/// Race a provider call against a deadline.
///
/// Whichever future finishes first decides the outcome; the loser is dropped,
/// which cancels it.
pub async fn dispatch_with_deadline<R, D>(request: R, deadline: D) -> AuthOutcome
where
    R: Future<Output = Result<(), AuthError>>,
    D: Future<Output = ()>,
{
    match select(pin!(request), pin!(deadline)).await {
        Either::Left((Ok(()), _)) => AuthOutcome::Completed,
        Either::Left((Err(err), _)) => {
            warn!(error = %err, "authentication request rejected");
            AuthOutcome::Rejected(err.to_string())
        }
        Either::Right(((), _)) => {
            warn!("authentication request timed out");
            AuthOutcome::TimedOut
        }
    }
}
