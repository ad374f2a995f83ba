//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Spinners for network stages

pub mod console;
pub mod progress;

pub use self::console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use self::progress::create_spinner;
