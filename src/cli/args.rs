//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DirectivePolicy, DEFAULT_CONFIG_FILE};

/// Pastebin fetch CLI.
#[derive(Parser, Debug)]
#[command(
    name = "pastebin-fetch",
    version,
    about = "Fetch a paste from Pastebin by title and write it to a file",
    long_about = "Logs in to the Pastebin API, looks up the first of your latest 100 pastes \
                  with the given title and writes its raw content to a file.\n\n\
                  A paste starting with %%FN=<name>%% is written to <name> instead of the \
                  output file, with the marker removed."
)]
pub struct Args {
    /// Title of the paste to fetch.
    pub title: String,

    /// Pastebin API developer key.
    #[arg(short, long, env = "PASTEBIN_DEV_KEY")]
    pub devkey: Option<String>,

    /// Pastebin account name.
    #[arg(short, long, env = "PASTEBIN_USER")]
    pub user: Option<String>,

    /// Pastebin account password.
    #[arg(short, long, env = "PASTEBIN_PASSWORD", hide_env_values = true)]
    pub passwd: Option<String>,

    /// Output file used when the paste carries no filename directive.
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// Directory directive-named files are written to.
    #[arg(long = "directory")]
    pub output_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Only honor a filename directive at the very start of the paste.
    #[arg(long)]
    pub anchor_directive: bool,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Hide progress spinners.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        config.options.target_title = self.title;

        if let Some(devkey) = self.devkey {
            config.account.developer_key = devkey;
        }

        if let Some(user) = self.user {
            config.account.username = user;
        }

        if let Some(passwd) = self.passwd {
            config.account.password = passwd;
        }

        if let Some(outfile) = self.outfile {
            config.options.output_file = outfile;
        }

        if let Some(dir) = self.output_directory {
            config.options.output_directory = Some(dir);
        }

        // Boolean flags (only override if set to non-default)
        if self.anchor_directive {
            config.options.directive_policy = DirectivePolicy::Anchored;
        }

        if let Some(timeout) = self.timeout {
            config.options.timeout_seconds = Some(timeout);
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
