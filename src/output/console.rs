//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!(
        "{} {}",
        style(env!("CARGO_PKG_NAME")).cyan().bold(),
        style(format!("v{}: fetch a paste by title", env!("CARGO_PKG_VERSION"))).dim()
    );
}

/// Print configuration summary.
pub fn print_config_summary(title: &str, output_file: &str, directive_policy: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Paste title: {}", title);
    println!("  Default output: {}", output_file);
    println!("  Directive policy: {}", directive_policy);
    println!();
}
