//! The fetch pipeline: login, list, resolve, fetch, write.

use std::path::PathBuf;

use indicatif::ProgressBar;

use crate::api::{Credentials, PastebinApi};
use crate::config::{Config, DirectivePolicy};
use crate::error::Result;
use crate::fs::write_output;
use crate::output::create_spinner;
use crate::paste::{extract, resolve_paste};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Key of the paste that was fetched.
    pub paste_key: String,
    /// File the content was written to.
    pub path: PathBuf,
    /// Whether the file name came from a directive in the paste.
    pub from_directive: bool,
    /// Bytes written, directive excluded.
    pub bytes_written: usize,
}

/// One configured run of the fetch pipeline.
///
/// Each stage runs to completion before the next starts, and a failing stage
/// ends the run. Nothing is written unless every network stage succeeded.
pub struct Pipeline {
    api: PastebinApi,
    credentials: Credentials,
    target_title: String,
    default_output: PathBuf,
    output_dir: PathBuf,
    directive_policy: DirectivePolicy,
    show_progress: bool,
}

impl Pipeline {
    /// Build a pipeline from a validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let api = PastebinApi::new(config.endpoints.clone(), config.timeout())?;

        Ok(Self {
            api,
            credentials: Credentials::from(&config.account),
            target_title: config.options.target_title.clone(),
            default_output: config.options.output_file.clone(),
            output_dir: config.output_directory(),
            directive_policy: config.options.directive_policy,
            show_progress: config.options.show_progress,
        })
    }

    /// Run every stage once.
    pub async fn run(&self) -> Result<FetchOutcome> {
        let spinner = self.spinner("Logging in to Pastebin...");
        let token = self.api.login(&self.credentials).await;
        finish(&spinner);
        let token = token?;
        tracing::info!("Logged in, session key {}", token.redacted());

        let spinner = self.spinner("Listing pastes...");
        let records = self
            .api
            .list_pastes(&self.credentials.developer_key, &token)
            .await;
        finish(&spinner);
        let records = records?;
        tracing::info!("Account lists {} paste(s)", records.len());

        let record = resolve_paste(&records, &self.target_title)?;
        tracing::info!(
            "Found paste '{}' with key {}",
            self.target_title,
            record.key
        );

        let spinner = self.spinner("Fetching raw paste...");
        let content = self.api.fetch_raw(&record.key).await;
        finish(&spinner);
        let content = content?;
        if content.is_empty() {
            tracing::warn!("Paste {} has no content", record.key);
        } else {
            tracing::info!("Content has length {}", content.len());
        }

        let target = extract(content, &self.default_output, self.directive_policy);
        if target.from_directive() {
            tracing::info!("Paste names its output file: {}", target.display_name());
        }

        let path = write_output(&target, &self.output_dir).await?;
        tracing::info!("Wrote content to {}", path.display());

        Ok(FetchOutcome {
            paste_key: record.key.clone(),
            path,
            from_directive: target.from_directive(),
            bytes_written: target.body.len(),
        })
    }

    fn spinner(&self, message: &str) -> Option<ProgressBar> {
        self.show_progress.then(|| create_spinner(message))
    }
}

fn finish(spinner: &Option<ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}
