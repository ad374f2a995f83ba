//! Writing the fetched paste to disk.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::fs::naming::validate_bare_filename;
use crate::paste::{OutputName, OutputTarget};

/// Resolve the path an output target is written to.
///
/// Directive names come from remote content and must be bare file names
/// placed inside `output_dir`. Relative default paths are placed inside
/// `output_dir` too; absolute ones are used as given.
pub fn resolve_output_path(target: &OutputTarget, output_dir: &Path) -> Result<PathBuf> {
    match &target.name {
        OutputName::Directive(name) => Ok(output_dir.join(validate_bare_filename(name)?)),
        OutputName::Default(path) if path.is_absolute() => Ok(path.clone()),
        OutputName::Default(path) => Ok(output_dir.join(path)),
    }
}

/// Write the target body, replacing any existing file.
///
/// The bytes are written exactly as fetched, so the file keeps the
/// encoding it was served in.
pub async fn write_output(target: &OutputTarget, output_dir: &Path) -> Result<PathBuf> {
    let output_path = resolve_output_path(target, output_dir)?;

    tokio::fs::create_dir_all(output_dir).await?;

    let mut file = File::create(&output_path).await?;
    file.write_all(&target.body).await?;
    file.flush().await?;

    tracing::debug!(
        "Wrote {} bytes to {}",
        target.body.len(),
        output_path.display()
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn directive_target(name: &str, body: &[u8]) -> OutputTarget {
        OutputTarget {
            name: OutputName::Directive(name.to_string()),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_resolve_directive_name() {
        let target = directive_target("result.nc", b"");
        let path = resolve_output_path(&target, Path::new("/out")).unwrap();
        assert_eq!(path, PathBuf::from("/out/result.nc"));
    }

    #[test]
    fn test_resolve_directive_name_kept_verbatim() {
        for name in ["job..v2.nc", "part:1.nc"] {
            let target = directive_target(name, b"");
            let path = resolve_output_path(&target, Path::new("/out")).unwrap();
            assert_eq!(path, Path::new("/out").join(name));
        }
    }

    #[test]
    fn test_resolve_default_paths() {
        let relative = OutputTarget {
            name: OutputName::Default(PathBuf::from("jobs/paste.txt")),
            body: Vec::new(),
        };
        assert_eq!(
            resolve_output_path(&relative, Path::new("/out")).unwrap(),
            PathBuf::from("/out/jobs/paste.txt")
        );

        let absolute = OutputTarget {
            name: OutputName::Default(PathBuf::from("/var/paste.txt")),
            body: Vec::new(),
        };
        assert_eq!(
            resolve_output_path(&absolute, Path::new("/out")).unwrap(),
            PathBuf::from("/var/paste.txt")
        );
    }

    #[test]
    fn test_resolve_rejects_traversal_directive() {
        let target = directive_target("../../etc/cron.d/job", b"");
        let err = resolve_output_path(&target, Path::new("/out")).unwrap_err();
        assert!(matches!(err, Error::InvalidFilename(_)));
    }

    #[tokio::test]
    async fn test_write_output_creates_file() {
        let dir = TempDir::new().unwrap();
        let target = directive_target("result.nc", b"G01 X0 Y0");

        let path = write_output(&target, dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join("result.nc"));
        assert_eq!(std::fs::read(&path).unwrap(), b"G01 X0 Y0");
    }

    #[tokio::test]
    async fn test_write_output_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("result.nc");
        std::fs::write(&existing, "old content that is longer").unwrap();

        let target = directive_target("result.nc", b"new");
        write_output(&target, dir.path()).await.unwrap();

        assert_eq!(std::fs::read(&existing).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_write_output_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let target = OutputTarget {
            name: OutputName::Default(PathBuf::from("missing/sub/paste.txt")),
            body: b"x".to_vec(),
        };

        let err = write_output(&target, dir.path()).await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
