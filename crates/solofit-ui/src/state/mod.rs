//! Application state management
//!
//! Reactive state shared through Leptos context: the toast queue and the
//! authentication backend used by the auth screen.

pub mod auth;
pub mod toasts;

pub use auth::{AuthActions, AuthBackend, SharedProvider, rejection_notice};
pub use toasts::{Toast, ToastQueue, Toaster, use_toaster};
