//! Reusable UI components

pub mod feature_card;
pub mod field;
pub mod strength_meter;
pub mod submit_button;
pub mod toast;

pub use feature_card::FeatureCard;
pub use field::{EmailField, InlineError, PasswordField};
pub use strength_meter::StrengthMeter;
pub use submit_button::SubmitButton;
pub use toast::ToastViewport;
