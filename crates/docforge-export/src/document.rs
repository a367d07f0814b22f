//! The seam between document types and export encoders.

use docforge_core::variant::DocumentKind;

use crate::csv::CsvRows;
use crate::error::ExportResult;

/// A computed document that can be rendered.
///
/// Implementors hold finished figures; rendering never recomputes or
/// mutates them, so every export of one document shows the same numbers.
pub trait Document {
    fn kind(&self) -> DocumentKind;

    /// Page title (`Invoice INV-20261019-042`).
    fn title(&self) -> String;

    /// File name without extension, before sanitizing.
    fn file_stem(&self) -> String;

    /// The document body as an HTML fragment, all user text escaped.
    fn html_fragment(&self) -> ExportResult<String>;

    /// The document as CSV rows.
    fn csv_rows(&self) -> ExportResult<CsvRows>;
}
