//! Submission lifecycle of the auth form.
//!
//! A request accepted by local validation moves the form to `Pending`. Only an
//! [`AuthOutcome`] moves it on; without an authentication provider nothing
//! does, and the form stays pending for the rest of the session.

use std::fmt;

/// Which operation a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    SignIn,
    SignUp,
    ResetPassword,
}

impl RequestKind {
    /// Button label while this request is pending.
    #[must_use]
    pub const fn pending_label(&self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::SignUp => "Creating account...",
            Self::ResetPassword => "Sending reset link...",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => write!(f, "sign_in"),
            Self::SignUp => write!(f, "sign_up"),
            Self::ResetPassword => write!(f, "reset_password"),
        }
    }
}

/// A validated request ready to hand to an authentication provider.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    ResetPassword { email: String },
}

impl AuthRequest {
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self {
            Self::SignIn { .. } => RequestKind::SignIn,
            Self::SignUp { .. } => RequestKind::SignUp,
            Self::ResetPassword { .. } => RequestKind::ResetPassword,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::SignIn { email, .. } | Self::SignUp { email, .. } | Self::ResetPassword { email } => {
                email
            }
        }
    }
}

// Passwords never reach logs.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("kind", &self.kind())
            .field("email", &self.email())
            .finish_non_exhaustive()
    }
}

/// How a dispatched request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Completed,
    Rejected(String),
    TimedOut,
}

impl AuthOutcome {
    /// Human readable failure reason, if the request did not complete.
    #[must_use]
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Completed => None,
            Self::Rejected(reason) => Some(reason.clone()),
            Self::TimedOut => Some("The request timed out. Please try again.".to_string()),
        }
    }
}

/// Submission state of the auth form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending(RequestKind),
    Succeeded(RequestKind),
    Failed { kind: RequestKind, reason: String },
}

impl SubmissionState {
    /// Inputs and buttons are disabled while this is true.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The request kind currently in flight.
    #[must_use]
    pub const fn pending_kind(&self) -> Option<RequestKind> {
        match self {
            Self::Pending(kind) => Some(*kind),
            _ => None,
        }
    }

    /// State reached when `outcome` arrives for a `kind` request.
    #[must_use]
    pub fn settle(kind: RequestKind, outcome: &AuthOutcome) -> Self {
        outcome
            .failure_reason()
            .map_or(Self::Succeeded(kind), |reason| Self::Failed { kind, reason })
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending(kind) => write!(f, "pending({kind})"),
            Self::Succeeded(kind) => write!(f, "succeeded({kind})"),
            Self::Failed { kind, reason } => write!(f, "failed({kind}): {reason}"),
        }
    }
}
