//! Login credentials and session tokens.

use std::fmt;

use crate::config::{validate_account, AccountConfig};
use crate::error::Result;

/// Long-lived Pastebin developer credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub developer_key: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        developer_key: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            developer_key: developer_key.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check that all three fields are present.
    pub fn validate(&self) -> Result<()> {
        validate_account(&AccountConfig {
            developer_key: self.developer_key.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Form parameters for the login endpoint.
    pub fn login_form(&self) -> [(&'static str, &str); 3] {
        [
            ("api_dev_key", self.developer_key.as_str()),
            ("api_user_name", self.username.as_str()),
            ("api_user_password", self.password.as_str()),
        ]
    }
}

impl From<&AccountConfig> for Credentials {
    fn from(account: &AccountConfig) -> Self {
        Self::new(
            account.developer_key.clone(),
            account.username.clone(),
            account.password.clone(),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("developer_key", &redact(&self.developer_key))
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Opaque user session key returned by the login endpoint.
///
/// Valid for one run only and never written anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Token shortened for display.
    pub fn redacted(&self) -> String {
        redact(&self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({})", self.redacted())
    }
}

/// Keep the first four characters of a secret.
fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if visible.len() == secret.len() {
        "***".to_string()
    } else {
        format!("{}***", visible)
    }
}
