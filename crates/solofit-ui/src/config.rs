//! Embedded application configuration

use solofit_core::AppConfig;

use crate::error::Result;

/// `solofit.toml`, compiled into the binary.
pub const EMBEDDED_CONFIG: &str = include_str!("../solofit.toml");

/// Parse and validate the embedded configuration.
///
/// # Errors
///
/// Returns [`crate::error::UiError::Config`] when the document is malformed
/// or holds an out-of-range value.
pub fn load_embedded() -> Result<AppConfig> {
    Ok(AppConfig::from_toml_str(EMBEDDED_CONFIG)?)
}
