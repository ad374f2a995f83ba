//! Configuration module for pastebin-fetch.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Filename directive policy
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{AccountConfig, Config, EndpointsConfig, OptionsConfig, DEFAULT_CONFIG_FILE};
pub use modes::DirectivePolicy;
pub use validation::{validate_account, validate_config};
