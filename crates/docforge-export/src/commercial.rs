//! # Invoices and Quotations
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INVOICE                                         Business name          │
//! │  Invoice #INV-20261019-042                       address / phone / tax  │
//! │                                                                         │
//! │  Bill To: client                      Invoice Date / Due Date / Currency│
//! │                                                                         │
//! │  ┌─────────────────────┬─────┬──────────┬──────────┐                    │
//! │  │ Description         │ Qty │ Rate     │ Amount   │  billable rows     │
//! │  └─────────────────────┴─────┴──────────┴──────────┘                    │
//! │                                    Subtotal / Discount / Shipping / Tax │
//! │                                    Total                                │
//! │  Notes (invoice) | Terms & Conditions (quotation)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use docforge_core::pricing::billable_items;
use docforge_core::variant::{DocumentKind, DocumentVariant};
use docforge_core::{PricingInput, PricingResult};
use serde::{Deserialize, Serialize};

use crate::csv::{row, CsvRows};
use crate::dates::{default_deadline, format_date, DateStyle};
use crate::document::Document;
use crate::error::ExportResult;
use crate::html::{escape, escape_multiline, label_row, optional_field};

/// A business or a client as printed on the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub address: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// GST/VAT registration number.
    pub tax_id: Option<String>,
}

/// An invoice or quotation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommercialDocument {
    pub variant: DocumentVariant,
    pub number: String,
    pub date: NaiveDate,
    /// Due date (invoice) or valid-until date (quotation).
    /// Defaults to 30 days after `date`.
    pub deadline: Option<NaiveDate>,
    pub business: Party,
    pub client: Party,
    pub pricing: PricingInput,
    pub notes: Option<String>,
}

/// Wording that differs between invoices and quotations.
struct Labels {
    noun: &'static str,
    recipient: &'static str,
    deadline: &'static str,
    notes: &'static str,
    rate_column: &'static str,
    amount_column: &'static str,
    closing: &'static str,
}

impl CommercialDocument {
    /// Totals under the document's variant.
    pub fn result(&self) -> PricingResult {
        self.variant.price(&self.pricing)
    }

    pub fn deadline(&self) -> NaiveDate {
        self.deadline.unwrap_or_else(|| default_deadline(self.date))
    }

    fn labels(&self) -> Labels {
        match self.variant.kind {
            DocumentKind::Quotation => Labels {
                noun: "Quotation",
                recipient: "Quote To",
                deadline: "Valid Until",
                notes: "Terms & Conditions",
                rate_column: "Unit Price",
                amount_column: "Total",
                closing: "Thank you for considering our services!",
            },
            _ => Labels {
                noun: "Invoice",
                recipient: "Bill To",
                deadline: "Due Date",
                notes: "Notes",
                rate_column: "Rate",
                amount_column: "Amount",
                closing: "Thank you for your business!",
            },
        }
    }

    fn party_block(out: &mut String, party: &Party) {
        out.push_str(&format!(
            "<p class=\"party-name\">{}</p><p>{}</p>",
            escape(&party.name),
            escape_multiline(&party.address)
        ));
        optional_field(out, "Phone", party.phone.as_deref());
        optional_field(out, "Email", party.email.as_deref());
        optional_field(out, "GST/VAT", party.tax_id.as_deref());
    }
}

impl Document for CommercialDocument {
    fn kind(&self) -> DocumentKind {
        self.variant.kind
    }

    fn title(&self) -> String {
        format!("{} {}", self.labels().noun, self.number)
    }

    fn file_stem(&self) -> String {
        format!("{}_{}", self.variant.kind.file_prefix(), self.number)
    }

    fn html_fragment(&self) -> ExportResult<String> {
        let labels = self.labels();
        let currency = self.variant.currency;
        let result = self.result();
        let mut out = String::new();

        out.push_str(&format!(
            "<div class=\"document-header\"><h1>{}</h1><p>{} #{}</p></div>",
            self.variant.kind.title(),
            labels.noun,
            escape(&self.number)
        ));

        out.push_str("<div class=\"business\">");
        Self::party_block(&mut out, &self.business);
        out.push_str("</div>");

        out.push_str(&format!(
            "<div class=\"client\"><h3>{}:</h3>",
            labels.recipient
        ));
        Self::party_block(&mut out, &self.client);
        out.push_str("</div>");

        out.push_str(&format!(
            "<div class=\"dates\"><p><strong>{} Date:</strong> {}</p>\
             <p><strong>{}:</strong> {}</p>\
             <p><strong>Currency:</strong> {}</p></div>",
            labels.noun,
            format_date(self.date, DateStyle::Long),
            labels.deadline,
            format_date(self.deadline(), DateStyle::Long),
            currency.code()
        ));

        out.push_str(&format!(
            "<table class=\"items\"><thead><tr><th>Description</th><th>Qty</th>\
             <th>{}</th><th>{}</th></tr></thead><tbody>",
            labels.rate_column, labels.amount_column
        ));
        for item in billable_items(&self.pricing.line_items) {
            out.push_str(&format!(
                "<tr><td>{}</td><td class=\"qty\">{}</td><td class=\"amount\">{}</td>\
                 <td class=\"amount\">{}</td></tr>",
                escape_multiline(item.description.trim()),
                item.quantity.normalize(),
                escape(&currency.format(item.unit_rate)),
                escape(&currency.format(item.amount()))
            ));
        }
        out.push_str("</tbody></table>");

        let totals = self.variant.format_totals(&self.pricing, &result);
        out.push_str("<table class=\"totals\"><tbody>");
        for total_row in &totals.rows {
            out.push_str(&label_row(&total_row.label, &total_row.amount));
        }
        out.push_str(&format!(
            "<tr class=\"total-row\"><td class=\"label\">{}:</td><td class=\"amount\">{}</td></tr>",
            totals.total.label,
            escape(&totals.total.amount)
        ));
        out.push_str("</tbody></table>");

        if let Some(notes) = self.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            out.push_str(&format!(
                "<div class=\"notes\"><h4>{}:</h4><p>{}</p></div>",
                escape(labels.notes),
                escape_multiline(notes)
            ));
        }

        out.push_str(&format!("<div class=\"footer\"><p>{}</p></div>", labels.closing));
        Ok(out)
    }

    fn csv_rows(&self) -> ExportResult<CsvRows> {
        let labels = self.labels();
        let result = self.result();

        let mut rows = vec![
            row([format!("{} Number", labels.noun), self.number.clone()]),
            row([format!("{} Date", labels.noun), self.date.to_string()]),
            row([labels.deadline.to_string(), self.deadline().to_string()]),
            row(["Business Name", self.business.name.as_str()]),
            row(["Client Name", self.client.name.as_str()]),
            row(["Currency", self.variant.currency.code()]),
            Vec::new(),
            row(["Description", "Quantity", labels.rate_column, labels.amount_column]),
        ];

        for item in billable_items(&self.pricing.line_items) {
            rows.push(row([
                item.description.trim().to_string(),
                item.quantity.normalize().to_string(),
                item.unit_rate.to_string(),
                item.amount().to_string(),
            ]));
        }

        rows.push(Vec::new());
        for line in self.variant.total_lines(&self.pricing, &result) {
            rows.push(row([line.label, String::new(), line.amount.to_string()]));
        }
        rows.push(row(["Total".to_string(), String::new(), result.total.to_string()]));

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
