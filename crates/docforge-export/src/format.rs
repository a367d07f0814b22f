//! # Export Formats
//!
//! ```text
//! ┌──────────┬────────────────────┬───────────┬──────────────────────────────┐
//! │ Format   │ MIME type          │ Extension │ Body                         │
//! ├──────────┼────────────────────┼───────────┼──────────────────────────────┤
//! │ Preview  │ text/html          │ html      │ document fragment only       │
//! │ Print    │ text/html          │ html      │ full page, print stylesheet  │
//! │ Word     │ application/msword │ doc       │ HTML with Office namespaces  │
//! │ Csv      │ text/csv           │ csv       │ comma-separated table        │
//! └──────────┴────────────────────┴───────────┴──────────────────────────────┘
//! ```
//!
//! The Word format is HTML that word processors open, not a binary format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Preview,
    Print,
    Word,
    Csv,
}

impl ExportFormat {
    pub const fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Preview | ExportFormat::Print => "text/html",
            ExportFormat::Word => "application/msword",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Preview | ExportFormat::Print => "html",
            ExportFormat::Word => "doc",
            ExportFormat::Csv => "csv",
        }
    }

    /// Suffix that keeps a preview and a print page of the same document
    /// from overwriting each other.
    pub(crate) const fn stem_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Preview => "_preview",
            _ => "",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Preview => "preview",
            ExportFormat::Print => "print",
            ExportFormat::Word => "word",
            ExportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preview" | "html" => Ok(ExportFormat::Preview),
            "print" | "pdf" => Ok(ExportFormat::Print),
            "word" | "doc" => Ok(ExportFormat::Word),
            "csv" | "excel" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format: {}", other)),
        }
    }
}

/// A rendered document, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: String,
    pub body: String,
}

/// Makes a user-supplied name safe to use as a file name.
///
/// Whitespace becomes `_`; anything other than letters, digits, `-`, `_`
/// and `.` is dropped.
pub fn sanitize_file_stem(raw: &str) -> String {
    let stem: String = raw
        .trim()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('_'),
            c if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') => Some(c),
            _ => None,
        })
        .collect();

    let stem = stem.trim_matches('.');
    if stem.is_empty() {
        "document".to_string()
    } else {
        stem.to_string()
    }
}
