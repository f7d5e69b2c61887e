//! Page components for the SoloFit UI
//!
//! This module contains the top-level page components for each route.

pub mod auth;
pub mod landing;
pub mod not_found;

pub use auth::AuthPage;
pub use landing::Landing;
pub use not_found::NotFound;
