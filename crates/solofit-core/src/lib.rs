//! Target-independent logic behind the SoloFit auth screen.
//!
//! Nothing in this crate touches the DOM, so everything here is tested
//! natively with `cargo test`.
//!
//! ## Module Structure
//! - `validation`: syntactic email check
//! - `strength`: password-strength score and display bands
//! - `policy`: password rules enforced on sign-up
//! - `form`: the auth form state machine
//! - `submission`: request / outcome / submission state types
//! - `provider`: async seam to an external identity provider
//! - `notice`: transient messages for the toast surface
//! - `config`: TOML configuration
//! - `error`, `result`: error types and logging combinators

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod form;
pub mod notice;
pub mod policy;
pub mod provider;
pub mod result;
pub mod strength;
pub mod submission;
pub mod validation;

pub use config::AppConfig;
pub use error::{AuthError, ConfigError, FieldError, FormError, ResetError};
pub use form::{AuthForm, AuthTab};
pub use notice::{Notice, NoticeLevel};
pub use policy::PasswordPolicy;
pub use provider::{AuthProvider, dispatch, dispatch_with_deadline};
pub use result::{Result, ResultExt};
pub use strength::{StrengthBand, StrengthScore, password_length, password_strength};
pub use submission::{AuthOutcome, AuthRequest, RequestKind, SubmissionState};
pub use validation::{is_valid_email, validate_email};
