//! Filesystem module.
//!
//! Provides:
//! - Filename validation
//! - Output path resolution and writing

pub mod naming;
pub mod writer;

pub use naming::validate_bare_filename;
pub use writer::{resolve_output_path, write_output};
