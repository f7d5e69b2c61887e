//! Leptos 0.7 CSR frontend for SoloFit
//!
//! A landing page and a sign-in / sign-up screen compiled to WASM. All form
//! rules live in `solofit-core`; this crate renders them.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - Browser console logging through `tracing`
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `pages`: Top-level page components
//! - `components`: Reusable UI components
//! - `state`: Toast queue and auth wiring shared through context
//! - `config`: Embedded configuration
//! - `logging`: Console subscriber
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod router;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
