//! Auth form state machine.
//!
//! Holds everything the sign-in / sign-up screen renders from. Each submit
//! clears the previous field errors, validates locally, and either records a
//! field error or moves to [`SubmissionState::Pending`] and returns the
//! [`AuthRequest`] to dispatch. Editing a field clears that field's error
//! before any re-validation.

use std::fmt;

use tracing::{debug, info};

use crate::error::{FieldError, FormError, ResetError};
use crate::policy::PasswordPolicy;
use crate::result::Result;
use crate::strength::{StrengthScore, password_strength};
use crate::submission::{AuthOutcome, AuthRequest, SubmissionState};
use crate::validation::{is_valid_email, validate_email};

/// Which half of the auth screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

impl AuthTab {
    /// Tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    /// Prefix for element ids inside this tab, e.g. `signin-email`.
    #[must_use]
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
        }
    }
}

impl fmt::Display for AuthTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id_prefix())
    }
}

/// State of the auth screen. Email and password are shared by both tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    email: String,
    password: String,
    show_password: bool,
    tab: AuthTab,
    email_error: Option<FieldError>,
    password_error: Option<FieldError>,
    submission: SubmissionState,
    policy: PasswordPolicy,
}

impl AuthForm {
    /// Empty form enforcing `policy` on sign-up.
    #[must_use]
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub const fn show_password(&self) -> bool {
        self.show_password
    }

    #[must_use]
    pub const fn tab(&self) -> AuthTab {
        self.tab
    }

    #[must_use]
    pub const fn email_error(&self) -> Option<&FieldError> {
        self.email_error.as_ref()
    }

    #[must_use]
    pub const fn password_error(&self) -> Option<&FieldError> {
        self.password_error.as_ref()
    }

    #[must_use]
    pub const fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    #[must_use]
    pub const fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// True while a request is in flight; inputs are disabled.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.submission.is_pending()
    }

    /// Strength of the current password.
    #[must_use]
    pub fn strength(&self) -> StrengthScore {
        password_strength(&self.password)
    }

    /// Non-empty and syntactically valid; drives the check mark.
    #[must_use]
    pub fn email_looks_valid(&self) -> bool {
        !self.email.is_empty() && is_valid_email(&self.email)
    }

    /// Replace the email and clear its error. Ignored while busy.
    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        if self.is_busy() {
            return false;
        }
        self.email = value.into();
        self.email_error = None;
        true
    }

    /// Replace the password and clear its error. Ignored while busy.
    pub fn set_password(&mut self, value: impl Into<String>) -> bool {
        if self.is_busy() {
            return false;
        }
        self.password = value.into();
        self.password_error = None;
        true
    }

    /// Flip password visibility. Ignored while busy.
    pub fn toggle_password_visibility(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.show_password = !self.show_password;
        true
    }

    pub fn select_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
    }

    /// Validate and produce a sign-in request.
    ///
    /// # Errors
    ///
    /// [`FormError::SubmissionInFlight`] while busy, or
    /// [`FieldError::InvalidEmail`] (also recorded as the email error).
    pub fn submit_sign_in(&mut self) -> Result<AuthRequest> {
        self.begin_submit()?;
        self.check_email()?;

        let request = AuthRequest::SignIn {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        Ok(self.accept(request))
    }

    /// Validate and produce a sign-up request.
    ///
    /// # Errors
    ///
    /// [`FormError::SubmissionInFlight`] while busy, [`FieldError::InvalidEmail`],
    /// or a password policy violation (recorded as the password error).
    pub fn submit_sign_up(&mut self) -> Result<AuthRequest> {
        self.begin_submit()?;
        self.check_email()?;

        if let Err(err) = self.policy.check(&self.password) {
            debug!(error = %err, "sign-up rejected by password policy");
            self.password_error = Some(err.clone());
            return Err(err.into());
        }

        let request = AuthRequest::SignUp {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        Ok(self.accept(request))
    }

    /// Validate the email and produce a password-reset request.
    ///
    /// Field errors are left untouched; failures are meant for the toast
    /// surface rather than inline display.
    ///
    /// # Errors
    ///
    /// [`FormError::SubmissionInFlight`] while busy, [`ResetError::EmailRequired`]
    /// for an empty email, [`ResetError::InvalidEmail`] otherwise.
    pub fn request_password_reset(&mut self) -> Result<AuthRequest> {
        if self.is_busy() {
            return Err(FormError::SubmissionInFlight);
        }
        if self.email.is_empty() {
            debug!("password reset requested without an email");
            return Err(ResetError::EmailRequired.into());
        }
        if !is_valid_email(&self.email) {
            debug!("password reset requested with an invalid email");
            return Err(ResetError::InvalidEmail.into());
        }

        let request = AuthRequest::ResetPassword {
            email: self.email.clone(),
        };
        Ok(self.accept(request))
    }

    /// Settle a pending submission. Returns false when nothing was pending.
    pub fn resolve(&mut self, outcome: &AuthOutcome) -> bool {
        let Some(kind) = self.submission.pending_kind() else {
            return false;
        };
        self.submission = SubmissionState::settle(kind, outcome);
        info!(state = %self.submission, "submission settled");
        true
    }

    fn begin_submit(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(FormError::SubmissionInFlight);
        }
        self.email_error = None;
        self.password_error = None;
        Ok(())
    }

    fn check_email(&mut self) -> Result<()> {
        validate_email(&self.email).map_err(|err| {
            debug!(tab = %self.tab, "submit rejected: invalid email");
            self.email_error = Some(err.clone());
            FormError::from(err)
        })
    }

    fn accept(&mut self, request: AuthRequest) -> AuthRequest {
        self.submission = SubmissionState::Pending(request.kind());
        info!(?request, "request accepted");
        request
    }
}
