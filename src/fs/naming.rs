//! Filename validation for names taken from paste content.

use crate::error::{Error, Result};

/// Check that a directive name is a bare file name.
///
/// The name is used unchanged. Only names that would resolve outside the
/// output directory, or that no file system accepts, are rejected.
pub fn validate_bare_filename(name: &str) -> Result<&str> {
    let problem = if name.trim().is_empty() {
        Some("name is empty or whitespace-only")
    } else if name == "." || name == ".." {
        Some("name refers to a directory")
    } else if name.contains(['/', '\\']) {
        Some("path separators are not allowed")
    } else if name.contains('\0') {
        Some("null bytes are not allowed")
    } else {
        None
    };

    match problem {
        Some(problem) => Err(Error::InvalidFilename(format!("'{}': {}", name, problem))),
        None => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_used_unchanged() {
        for name in ["result.nc", "job..v2.nc", "part:1.nc", "..hidden", "a*b?.nc"] {
            assert_eq!(validate_bare_filename(name).unwrap(), name);
        }
    }

    #[test]
    fn test_directory_names_rejected() {
        assert!(validate_bare_filename(".").is_err());
        assert!(validate_bare_filename("..").is_err());
    }

    #[test]
    fn test_separators_rejected() {
        assert!(validate_bare_filename("../etc/passwd").is_err());
        assert!(validate_bare_filename("/etc/passwd").is_err());
        assert!(validate_bare_filename("jobs\\result.nc").is_err());
    }

    #[test]
    fn test_null_byte_rejected() {
        assert!(matches!(
            validate_bare_filename("file\0name.nc"),
            Err(Error::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_blank_rejected() {
        assert!(validate_bare_filename("   ").is_err());
    }
}
