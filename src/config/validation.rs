//! Configuration validation logic.

use crate::config::loader::{AccountConfig, Config, EndpointsConfig};
use crate::error::{Error, Result};
use url::Url;

/// Credential value shipped in the example configuration file.
const EXAMPLE_PLACEHOLDER: &str = "REPLACEME";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_account(&config.account)?;
    validate_endpoints(&config.endpoints)?;
    validate_target_title(&config.options.target_title)?;

    if config.options.output_file.as_os_str().is_empty() {
        return Err(Error::MissingConfig("output_file".to_string()));
    }

    if config.options.timeout_seconds == Some(0) {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least one second".to_string(),
        });
    }

    Ok(())
}

/// Validate that all three credentials are present.
pub fn validate_account(account: &AccountConfig) -> Result<()> {
    validate_credential("developer_key", &account.developer_key)?;
    validate_credential("username", &account.username)?;
    validate_credential("password", &account.password)?;

    Ok(())
}

fn validate_credential(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingConfig(format!(
            "{} (pass --devkey, --user and --passwd together)",
            field
        )));
    }

    // Untouched value from pastebin-fetch.example.toml
    if value == EXAMPLE_PLACEHOLDER {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Value is still the example placeholder. Please provide your actual Pastebin {}.",
                field.replace('_', " ")
            ),
        });
    }

    Ok(())
}

/// Validate the API endpoint URLs.
pub fn validate_endpoints(endpoints: &EndpointsConfig) -> Result<()> {
    validate_endpoint("login_url", &endpoints.login_url)?;
    validate_endpoint("post_url", &endpoints.post_url)?;
    validate_endpoint("raw_base_url", &endpoints.raw_base_url)?;

    Ok(())
}

fn validate_endpoint(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Endpoint must use http or https (got '{}')", url.scheme()),
        });
    }

    Ok(())
}

/// Validate the paste title to look for.
pub fn validate_target_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(Error::MissingConfig("target_title".to_string()));
    }

    Ok(())
}
