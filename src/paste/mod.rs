//! Paste module.
//!
//! Provides:
//! - Listing parsing and title resolution
//! - Raw content and output target types
//! - Filename directive extraction

pub mod content;
pub mod directive;
pub mod record;

pub use content::{OutputName, OutputTarget, PasteContent};
pub use directive::{extract, find_directive, Directive, MAX_DIRECTIVE_NAME_LEN};
pub use record::{parse_paste_list, resolve_paste, PasteRecord, LIST_RESULTS_LIMIT};
