//! Document dates.
//!
//! Forms submit ISO dates (`2026-10-19`). Invoices and quotations print
//! them long-form (`October 19, 2026`); salary slips use the Indian
//! day-first style (`19/10/2026`).

use chrono::{Days, NaiveDate};

use crate::error::{ExportError, ExportResult};

/// Days between a document date and its default due / valid-until date.
pub const DEFAULT_TERM_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `October 19, 2026`
    Long,
    /// `19/10/2026`
    Indian,
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(field: &str, raw: &str) -> ExportResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ExportError::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// Parses an optional date field; blank input is `None`.
pub fn parse_optional_date(field: &str, raw: Option<&str>) -> ExportResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(field, value).map(Some),
    }
}

pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Long => date.format("%B %-d, %Y").to_string(),
        DateStyle::Indian => date.format("%d/%m/%Y").to_string(),
    }
}

/// `date` plus the default 30-day term.
pub fn default_deadline(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(DEFAULT_TERM_DAYS))
        .unwrap_or(date)
}
