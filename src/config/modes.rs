//! Filename directive policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a `%%FN=<name>%%` directive is recognized in paste content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectivePolicy {
    /// First directive anywhere in the content (default).
    ///
    /// Everything up to the end of the directive is dropped, including any
    /// text that preceded it.
    #[default]
    Anywhere,
    /// Directive only counts when it starts the content.
    Anchored,
}

impl fmt::Display for DirectivePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectivePolicy::Anywhere => write!(f, "anywhere"),
            DirectivePolicy::Anchored => write!(f, "anchored"),
        }
    }
}

impl FromStr for DirectivePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anywhere" => Ok(DirectivePolicy::Anywhere),
            "anchored" => Ok(DirectivePolicy::Anchored),
            _ => Err(format!("Unknown directive policy: {}", s)),
        }
    }
}
