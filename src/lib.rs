//! pastebin-fetch - fetch a Pastebin paste by title and save it to a file.
//!
//! A run logs in to the Pastebin API, lists the account's latest pastes,
//! picks the first one with the configured title, downloads its raw content
//! and writes it to disk. A paste whose content carries a `%%FN=<name>%%`
//! directive is written to `<name>` with the directive removed.
//!
//! # Example
//!
//! ```no_run
//! use pastebin_fetch::{Config, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.account.developer_key = "dev-key".into();
//!     config.account.username = "user".into();
//!     config.account.password = "password".into();
//!
//!     let outcome = Pipeline::new(&config)?.run().await?;
//!     println!("wrote {}", outcome.path.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod paste;
pub mod pipeline;

// Re-exports for convenience
pub use api::{Credentials, PastebinApi, SessionToken};
pub use config::{Config, DirectivePolicy};
pub use error::{Error, ErrorCategory, Result};
pub use paste::{OutputTarget, PasteContent, PasteRecord};
pub use pipeline::{FetchOutcome, Pipeline};
