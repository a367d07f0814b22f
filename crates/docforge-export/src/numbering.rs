//! Generated document numbers: `{PREFIX}-{YYYYMMDD}-{NNN}`.
//!
//! The three-digit suffix is random. Numbers are a convenience default the
//! user can overwrite, not a unique key.

use chrono::NaiveDate;
use docforge_core::variant::DocumentKind;
use uuid::Uuid;

/// A fresh number for a document dated `date`.
///
/// ```rust
/// use chrono::NaiveDate;
/// use docforge_core::variant::DocumentKind;
/// use docforge_export::numbering::generate_number;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let number = generate_number(DocumentKind::Invoice, date);
/// assert!(number.starts_with("INV-20261019-"));
/// assert_eq!(number.len(), "INV-20261019-000".len());
/// ```
pub fn generate_number(kind: DocumentKind, date: NaiveDate) -> String {
    let suffix = (Uuid::new_v4().as_u128() % 1000) as u16;
    number_with_suffix(kind, date, suffix)
}

/// Builds a number from an explicit suffix (taken modulo 1000).
pub fn number_with_suffix(kind: DocumentKind, date: NaiveDate, suffix: u16) -> String {
    format!(
        "{}-{}-{:03}",
        kind.number_prefix(),
        date.format("%Y%m%d"),
        suffix % 1000
    )
}
