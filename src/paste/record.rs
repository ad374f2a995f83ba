//! Paste listing parsing and title resolution.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Number of pastes requested from the listing endpoint.
///
/// Pastes beyond this many are never considered.
pub const LIST_RESULTS_LIMIT: u32 = 100;

/// Body returned by the listing endpoint for an account without pastes.
const NO_PASTES: &str = "No pastes found.";

/// Prefix of every error body the Pastebin API returns.
const BAD_REQUEST: &str = "Bad API request";

/// A paste entry from the account listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRecord {
    /// Opaque paste key, used to build the raw URL.
    pub key: String,
    pub title: String,
    pub date: Option<String>,
    pub format: Option<String>,
    pub url: Option<String>,
}

/// Listing wrapped in a synthesized root.
///
/// `pastes` is always a sequence, whether the listing held one `<paste>`
/// element or many.
#[derive(Debug, Default, Deserialize)]
struct PasteList {
    #[serde(rename = "paste", default)]
    pastes: Vec<ListedPaste>,
}

#[derive(Debug, Deserialize)]
struct ListedPaste {
    paste_key: Option<String>,
    paste_title: Option<String>,
    paste_date: Option<String>,
    paste_format_short: Option<String>,
    paste_url: Option<String>,
}

impl ListedPaste {
    fn into_record(self) -> Option<PasteRecord> {
        Some(PasteRecord {
            key: self.paste_key?,
            title: self.paste_title?,
            date: self.paste_date,
            format: self.paste_format_short,
            url: self.paste_url,
        })
    }
}

/// Parse the body of a `list` request into paste records, in document order.
///
/// The endpoint answers with a bare sequence of `<paste>` fragments, so a
/// root element is wrapped around it before parsing. Entries missing a key
/// or a title are skipped.
pub fn parse_paste_list(body: &str) -> Result<Vec<PasteRecord>> {
    let trimmed = body.trim();

    if trimmed.starts_with(BAD_REQUEST) {
        return Err(Error::Lookup(trimmed.to_string()));
    }

    if trimmed.is_empty() || trimmed == NO_PASTES {
        return Ok(Vec::new());
    }

    let document = format!("<pastes>{}</pastes>", body);
    let list: PasteList = quick_xml::de::from_str(&document)
        .map_err(|e| Error::Lookup(format!("Malformed paste listing: {}", e)))?;

    let total = list.pastes.len();
    let records: Vec<PasteRecord> = list
        .pastes
        .into_iter()
        .filter_map(ListedPaste::into_record)
        .collect();

    if records.len() < total {
        tracing::debug!(
            "Skipped {} listing entries without key or title",
            total - records.len()
        );
    }

    Ok(records)
}

/// Find the first record whose title equals `title` exactly.
pub fn resolve_paste<'a>(records: &'a [PasteRecord], title: &str) -> Result<&'a PasteRecord> {
    records
        .iter()
        .find(|record| record.title == title)
        .ok_or_else(|| Error::PasteNotFound(title.to_string()))
}
