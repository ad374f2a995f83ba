//! Raw paste content and the file it resolves to.

use std::path::PathBuf;

/// Raw paste payload, kept as the bytes the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteContent {
    bytes: Vec<u8>,
}

impl PasteContent {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<&str> for PasteContent {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Where the output file name came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputName {
    /// Caller-supplied path, used as given.
    Default(PathBuf),
    /// Bare file name taken from a `%%FN=<name>%%` directive.
    Directive(String),
}

/// The file a paste ends up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub name: OutputName,
    /// Content to write, with any directive removed.
    pub body: Vec<u8>,
}

impl OutputTarget {
    /// Whether the name came from a directive in the content.
    pub fn from_directive(&self) -> bool {
        matches!(self.name, OutputName::Directive(_))
    }

    /// File name for display.
    pub fn display_name(&self) -> String {
        match &self.name {
            OutputName::Default(path) => path.display().to_string(),
            OutputName::Directive(name) => name.clone(),
        }
    }
}
