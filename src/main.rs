//! pastebin-fetch - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pastebin_fetch::{
    cli::Args,
    config::{validate_config, Config, DEFAULT_CONFIG_FILE},
    error::{exit_codes, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_success,
        print_warning,
    },
    FetchOutcome, Pipeline,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            print_error("Aborting!");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<FetchOutcome> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        if config_path != Path::new(DEFAULT_CONFIG_FILE) {
            print_warning(&format!(
                "Configuration file not found: {}",
                config_path.display()
            ));
        }
        tracing::debug!("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    print_config_summary(
        &config.options.target_title,
        &config.options.output_file.display().to_string(),
        &config.options.directive_policy.to_string(),
    );

    print_info(&format!(
        "Looking up paste '{}' on Pastebin...",
        config.options.target_title
    ));

    let outcome = Pipeline::new(&config)?.run().await?;

    if outcome.from_directive {
        print_info("Output file name taken from the paste's %%FN=...%% directive");
    }
    print_success(&format!(
        "Wrote {} bytes from paste {} to {}",
        outcome.bytes_written,
        outcome.paste_key,
        outcome.path.display()
    ));

    Ok(outcome)
}
