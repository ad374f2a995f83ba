//! Filename directive extraction.
//!
//! A paste may carry a marker of the form `%%FN=<name>%%`, where `<name>` is
//! 1 to 256 characters other than `%`. When found, the name replaces the
//! default output file name and the content is cut to start right after the
//! marker. Only the first marker is consulted.

use std::path::Path;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::config::DirectivePolicy;
use crate::paste::content::{OutputName, OutputTarget, PasteContent};

/// Longest file name a directive may carry, in characters.
pub const MAX_DIRECTIVE_NAME_LEN: usize = 256;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"%%FN=([^%]{{1,{}}})%%", MAX_DIRECTIVE_NAME_LEN))
        .expect("directive pattern is valid")
});

/// A directive located in paste content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// File name carried by the directive.
    pub name: String,
    /// Byte offset the directive starts at.
    pub start: usize,
    /// Byte offset just past the closing `%%`.
    pub end: usize,
}

/// Locate the first directive in `content` allowed by `policy`.
pub fn find_directive(content: &[u8], policy: DirectivePolicy) -> Option<Directive> {
    let captures = DIRECTIVE.captures(content)?;
    let whole = captures.get(0)?;
    let name = captures.get(1)?;

    if policy == DirectivePolicy::Anchored && whole.start() != 0 {
        tracing::debug!(
            "Ignoring directive at byte {} (directives must start the paste)",
            whole.start()
        );
        return None;
    }

    Some(Directive {
        name: String::from_utf8_lossy(name.as_bytes()).into_owned(),
        start: whole.start(),
        end: whole.end(),
    })
}

/// Resolve the output target for `content`.
///
/// Without a directive the default name is used and the content is kept
/// byte for byte.
pub fn extract(content: PasteContent, default_name: &Path, policy: DirectivePolicy) -> OutputTarget {
    match find_directive(content.as_bytes(), policy) {
        Some(directive) => {
            if directive.start > 0 {
                tracing::warn!(
                    "Filename directive found at byte {}; discarding the {} bytes before it",
                    directive.start,
                    directive.start
                );
            }

            let mut body = content.into_bytes();
            body.drain(..directive.end);

            OutputTarget {
                name: OutputName::Directive(directive.name),
                body,
            }
        }
        None => OutputTarget {
            name: OutputName::Default(default_name.to_path_buf()),
            body: content.into_bytes(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn default_name() -> PathBuf {
        PathBuf::from("paste.txt")
    }

    fn extract_str(content: &str, policy: DirectivePolicy) -> OutputTarget {
        extract(PasteContent::from(content), &default_name(), policy)
    }

    #[test]
    fn test_no_directive_keeps_content() {
        let content = "G01 X0 Y0\nG01 X10 Y0\n";
        let target = extract_str(content, DirectivePolicy::Anywhere);

        assert_eq!(target.name, OutputName::Default(default_name()));
        assert_eq!(target.body, content.as_bytes());
    }

    #[test]
    fn test_leading_directive() {
        let target = extract_str("%%FN=out.txt%%rest-of-content", DirectivePolicy::Anywhere);

        assert_eq!(target.name, OutputName::Directive("out.txt".to_string()));
        assert_eq!(target.body, b"rest-of-content");
    }

    #[test]
    fn test_leading_directive_anchored() {
        let target = extract_str("%%FN=result.nc%%G01 X0 Y0", DirectivePolicy::Anchored);

        assert_eq!(target.name, OutputName::Directive("result.nc".to_string()));
        assert_eq!(target.body, b"G01 X0 Y0");
    }

    #[test]
    fn test_name_length_boundary() {
        let name = "a".repeat(MAX_DIRECTIVE_NAME_LEN);
        let content = format!("%%FN={}%%body", name);
        let target = extract_str(&content, DirectivePolicy::Anywhere);
        assert_eq!(target.name, OutputName::Directive(name));
        assert_eq!(target.body, b"body");

        let name = "a".repeat(MAX_DIRECTIVE_NAME_LEN + 1);
        let content = format!("%%FN={}%%body", name);
        let target = extract_str(&content, DirectivePolicy::Anywhere);
        assert_eq!(target.name, OutputName::Default(default_name()));
        assert_eq!(target.body, content.as_bytes());
    }

    #[test]
    fn test_name_length_counts_characters() {
        let name = "ü".repeat(MAX_DIRECTIVE_NAME_LEN);
        let content = format!("%%FN={}%%x", name);
        let target = extract_str(&content, DirectivePolicy::Anywhere);
        assert_eq!(target.name, OutputName::Directive(name));
    }

    #[test]
    fn test_empty_name_is_not_a_directive() {
        let content = "%%FN=%%body";
        let target = extract_str(content, DirectivePolicy::Anywhere);
        assert_eq!(target.name, OutputName::Default(default_name()));
        assert_eq!(target.body, content.as_bytes());
    }

    #[test]
    fn test_mid_content_directive_anywhere() {
        let target = extract_str("header\n%%FN=late.nc%%G00 Z5", DirectivePolicy::Anywhere);

        assert_eq!(target.name, OutputName::Directive("late.nc".to_string()));
        // Text before the marker is dropped along with it
        assert_eq!(target.body, b"G00 Z5");
    }

    #[test]
    fn test_mid_content_directive_anchored() {
        let content = "header\n%%FN=late.nc%%G00 Z5";
        let target = extract_str(content, DirectivePolicy::Anchored);

        assert_eq!(target.name, OutputName::Default(default_name()));
        assert_eq!(target.body, content.as_bytes());
    }

    #[test]
    fn test_only_first_directive_used() {
        let target = extract_str("%%FN=one.nc%%%%FN=two.nc%%body", DirectivePolicy::Anywhere);

        assert_eq!(target.name, OutputName::Directive("one.nc".to_string()));
        assert_eq!(target.body, b"%%FN=two.nc%%body");
    }

    #[test]
    fn test_find_directive_offsets() {
        let directive = find_directive(b"ab%%FN=x.nc%%cd", DirectivePolicy::Anywhere).unwrap();
        assert_eq!(directive.name, "x.nc");
        assert_eq!(directive.start, 2);
        assert_eq!(directive.end, 13);
    }

    #[test]
    fn test_non_utf8_body_preserved() {
        let mut bytes = b"%%FN=latin1.txt%%".to_vec();
        bytes.extend_from_slice(&[0x47, 0xe9, 0x0a]);

        let target = extract(PasteContent::new(bytes), &default_name(), DirectivePolicy::Anywhere);
        assert_eq!(target.name, OutputName::Directive("latin1.txt".to_string()));
        assert_eq!(target.body, vec![0x47, 0xe9, 0x0a]);
    }
}
