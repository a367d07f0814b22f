//! # Payment Receipts
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              RECEIPT                                    │
//! │                        Receipt #REC-20261019-311                        │
//! │                        Date: October 19, 2026                           │
//! │                                                                         │
//! │  Received From: payer (email)         Received By: recipient (address)  │
//! │                                                                         │
//! │  Payment Details: Amount / Payment Method / Description                 │
//! │                                                                         │
//! │  Thank you for your payment!                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A receipt records one amount already paid. Nothing is priced; the amount
//! is printed in its currency with two decimals.

use chrono::NaiveDate;
use docforge_core::currency::Currency;
use docforge_core::variant::DocumentKind;
use docforge_core::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::commercial::Party;
use crate::csv::{row, CsvRows};
use crate::dates::{format_date, DateStyle};
use crate::document::Document;
use crate::error::ExportResult;
use crate::html::{escape, escape_multiline, label_row, optional_field};

/// How the payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
    Check,
    OnlinePayment,
}

impl PaymentMethod {
    /// Reads the method a form submits (`"Bank Transfer"`, `bank_transfer`).
    pub fn parse(raw: &str) -> Option<PaymentMethod> {
        match raw.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "credit_card" => Some(PaymentMethod::CreditCard),
            "debit_card" => Some(PaymentMethod::DebitCard),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "check" | "cheque" => Some(PaymentMethod::Check),
            "online_payment" | "online" => Some(PaymentMethod::OnlinePayment),
            _ => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Check => "Check",
            PaymentMethod::OnlinePayment => "Online Payment",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A receipt for one payment.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub number: String,
    pub date: NaiveDate,
    pub currency: Currency,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    /// Who paid. Only the name and email are printed.
    pub payer: Party,
    /// Who was paid. Only the name and address are printed.
    pub recipient: Party,
    pub description: String,
}

impl Document for Receipt {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Receipt
    }

    fn title(&self) -> String {
        format!("Receipt {}", self.number)
    }

    fn file_stem(&self) -> String {
        format!("{}_{}", DocumentKind::Receipt.file_prefix(), self.number)
    }

    fn html_fragment(&self) -> ExportResult<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "<div class=\"document-header\"><h1>{}</h1><p>Receipt #{}</p>\
             <p>Date: {}</p></div>",
            DocumentKind::Receipt.title(),
            escape(&self.number),
            format_date(self.date, DateStyle::Long)
        ));

        out.push_str(&format!(
            "<div class=\"payer\"><h3>Received From:</h3><p class=\"party-name\">{}</p>",
            escape(&self.payer.name)
        ));
        optional_field(&mut out, "Email", self.payer.email.as_deref());
        out.push_str("</div>");

        out.push_str(&format!(
            "<div class=\"recipient\"><h3>Received By:</h3><p class=\"party-name\">{}</p>",
            escape(&self.recipient.name)
        ));
        if !self.recipient.address.trim().is_empty() {
            out.push_str(&format!("<p>{}</p>", escape_multiline(&self.recipient.address)));
        }
        out.push_str("</div>");

        out.push_str("<div class=\"payment\"><h3>Payment Details:</h3><table class=\"totals\"><tbody>");
        out.push_str(&label_row("Amount", &self.currency.format(self.amount)));
        out.push_str(&label_row("Payment Method", self.payment_method.label()));
        out.push_str(&format!(
            "</tbody></table><h4>Description:</h4><p>{}</p></div>",
            escape_multiline(&self.description)
        ));

        out.push_str(
            "<div class=\"footer\"><p>Thank you for your payment!</p>\
             <p>This receipt serves as proof of payment.</p></div>",
        );
        Ok(out)
    }

    fn csv_rows(&self) -> ExportResult<CsvRows> {
        Ok(vec![
            row(["Receipt Number", self.number.as_str()]),
            row(["Date".to_string(), self.date.to_string()]),
            row(["Payer", self.payer.name.as_str()]),
            row(["Recipient", self.recipient.name.as_str()]),
            row(["Amount".to_string(), self.amount.to_string()]),
            row(["Currency", self.currency.code()]),
            row(["Payment Method", self.payment_method.label()]),
            row(["Description", self.description.as_str()]),
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
