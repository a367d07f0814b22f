//! # docforge-export: Export Encoders
//!
//! Renders computed documents as preview fragments, printable pages,
//! Word-compatible HTML and CSV text.
//!
//! ## Flow
//! ```text
//! ┌───────────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │ CommercialDocument│     │                   │     │ Artifact         │
//! │ SalarySlip        │────►│ export(doc, fmt)  │────►│  file_name       │
//! │ Receipt           │     │                   │     │  mime_type, body │
//! │ (impl Document)   │     │                   │     │                  │
//! └───────────────────┘     └───────────────────┘     └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`] - The `Document` trait
//! - [`commercial`] - Invoices and quotations
//! - [`salary_slip`] - Salary slips
//! - [`receipt`] - Payment receipts
//! - [`format`] - Export formats and the `Artifact` they produce
//! - [`html`] / [`envelope`] - Escaping and page wrappers
//! - [`csv`] - CSV quoting
//! - [`dates`] / [`numbering`] - Document dates and generated numbers
//!
//! ## Example
//! ```rust
//! use chrono::NaiveDate;
//! use docforge_core::currency::Currency;
//! use docforge_core::variant::DocumentVariant;
//! use docforge_core::{LineItem, Money, PricingInput, Rate};
//! use docforge_export::commercial::{CommercialDocument, Party};
//! use docforge_export::{export, ExportFormat};
//! use rust_decimal_macros::dec;
//!
//! let invoice = CommercialDocument {
//!     variant: DocumentVariant::invoice(Currency::Usd),
//!     number: "INV-20261019-042".to_string(),
//!     date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
//!     deadline: None,
//!     business: Party { name: "Acme".into(), ..Default::default() },
//!     client: Party { name: "Globex".into(), ..Default::default() },
//!     pricing: PricingInput {
//!         line_items: vec![LineItem::new("Widget", dec!(3), Money::from_cents(1000))],
//!         tax_rate: Rate::from_bps(800),
//!         ..Default::default()
//!     },
//!     notes: None,
//! };
//!
//! let artifact = export(&invoice, ExportFormat::Word).unwrap();
//! assert_eq!(artifact.file_name, "Invoice_INV-20261019-042.doc");
//! assert_eq!(artifact.mime_type, "application/msword");
//! assert!(artifact.body.contains("$32.40"));
//! ```

pub mod commercial;
pub mod csv;
pub mod dates;
pub mod document;
pub mod envelope;
pub mod error;
pub mod format;
pub mod html;
pub mod numbering;
pub mod receipt;
pub mod salary_slip;

pub use document::Document;
pub use error::{ExportError, ExportResult};
pub use format::{Artifact, ExportFormat};

use format::sanitize_file_stem;

/// Renders `document` in `format`.
pub fn export(document: &dyn Document, format: ExportFormat) -> ExportResult<Artifact> {
    let body = match format {
        ExportFormat::Preview => document.html_fragment()?,
        ExportFormat::Print => envelope::print_page(&document.title(), &document.html_fragment()?),
        ExportFormat::Word => {
            envelope::word_document(&document.title(), &document.html_fragment()?)
        }
        ExportFormat::Csv => csv::encode(&document.csv_rows()?),
    };

    Ok(Artifact {
        file_name: format!(
            "{}{}.{}",
            sanitize_file_stem(&document.file_stem()),
            format.stem_suffix(),
            format.extension()
        ),
        mime_type: format.mime_type().to_string(),
        body,
    })
}
