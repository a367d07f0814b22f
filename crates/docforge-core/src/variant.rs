//! # Document Variants
//!
//! One engine, several document types. A [`DocumentVariant`] says which
//! pipeline features a document uses and how its figures are labelled.
//!
//! ```text
//! ┌──────────────┬──────────┬──────────┬──────────┬─────────────────────┐
//! │ Kind         │ Prefix   │ Discount │ Shipping │ Tax row             │
//! ├──────────────┼──────────┼──────────┼──────────┼─────────────────────┤
//! │ Invoice      │ INV      │    -     │    -     │ GST / VAT / ... (%) │
//! │ Quotation    │ QUO      │    ✓     │    ✓     │ Tax (%)             │
//! │ SalarySlip   │ SAL      │   n/a    │   n/a    │ n/a (payroll)       │
//! │ Receipt      │ REC      │   n/a    │   n/a    │ n/a (single amount) │
//! └──────────────┴──────────┴──────────┴──────────┴─────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use ts_rs::TS;

use crate::currency::Currency;
use crate::money::Money;
use crate::pricing::{price_with_policy, PricingPolicy};
use crate::types::{DiscountMode, PricingInput, PricingResult};

// =============================================================================
// Document Kind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Quotation,
    SalarySlip,
    Receipt,
}

impl DocumentKind {
    /// Heading printed at the top of the document.
    pub const fn title(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "INVOICE",
            DocumentKind::Quotation => "QUOTATION",
            DocumentKind::SalarySlip => "SALARY SLIP",
            DocumentKind::Receipt => "RECEIPT",
        }
    }

    /// Prefix of generated document numbers (`INV-20261019-042`).
    pub const fn number_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "INV",
            DocumentKind::Quotation => "QUO",
            DocumentKind::SalarySlip => "SAL",
            DocumentKind::Receipt => "REC",
        }
    }

    /// Prefix of exported file names (`Invoice_INV-20261019-042.doc`).
    pub const fn file_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Quotation => "Quotation",
            DocumentKind::SalarySlip => "SalarySlip",
            DocumentKind::Receipt => "Receipt",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_prefix())
    }
}

// =============================================================================
// Tax Label
// =============================================================================

/// Name of the tax shown on the totals row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxLabel {
    Gst,
    Vat,
    SalesTax,
    #[default]
    Tax,
    Custom(String),
}

impl TaxLabel {
    /// Reads the tax type a form submits. Unknown names become custom labels;
    /// blank input is the generic "Tax".
    pub fn parse(raw: &str) -> TaxLabel {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "" | "tax" => TaxLabel::Tax,
            "gst" => TaxLabel::Gst,
            "vat" => TaxLabel::Vat,
            "sales_tax" => TaxLabel::SalesTax,
            _ => TaxLabel::Custom(raw.to_string()),
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        match self {
            TaxLabel::Gst => Cow::Borrowed("GST"),
            TaxLabel::Vat => Cow::Borrowed("VAT"),
            TaxLabel::SalesTax => Cow::Borrowed("SALES TAX"),
            TaxLabel::Tax => Cow::Borrowed("Tax"),
            TaxLabel::Custom(name) => Cow::Owned(name.to_uppercase()),
        }
    }
}

impl fmt::Display for TaxLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// =============================================================================
// Variant
// =============================================================================

/// Per-document configuration of the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentVariant {
    pub kind: DocumentKind,
    pub currency: Currency,
    pub tax_label: TaxLabel,
    pub discount_enabled: bool,
    pub shipping_enabled: bool,
    pub pricing: PricingPolicy,
}

impl DocumentVariant {
    /// Invoice: items and tax only.
    pub fn invoice(currency: Currency) -> Self {
        DocumentVariant {
            kind: DocumentKind::Invoice,
            currency,
            tax_label: TaxLabel::Gst,
            discount_enabled: false,
            shipping_enabled: false,
            pricing: PricingPolicy::default(),
        }
    }

    /// Quotation: items, discount, shipping and tax.
    pub fn quotation(currency: Currency) -> Self {
        DocumentVariant {
            kind: DocumentKind::Quotation,
            currency,
            tax_label: TaxLabel::Tax,
            discount_enabled: true,
            shipping_enabled: true,
            pricing: PricingPolicy::default(),
        }
    }

    pub fn with_tax_label(mut self, tax_label: TaxLabel) -> Self {
        self.tax_label = tax_label;
        self
    }

    pub fn with_pricing(mut self, pricing: PricingPolicy) -> Self {
        self.pricing = pricing;
        self
    }

    /// The input the pipeline actually sees: disabled features are zeroed.
    pub fn effective_input<'a>(&self, input: &'a PricingInput) -> Cow<'a, PricingInput> {
        let strip_discount = !self.discount_enabled && input.discount_mode != DiscountMode::None;
        let strip_shipping = !self.shipping_enabled && !input.shipping_cost.is_zero();
        if !strip_discount && !strip_shipping {
            return Cow::Borrowed(input);
        }

        let mut owned = input.clone();
        if strip_discount {
            owned.discount_mode = DiscountMode::None;
            owned.discount_value = Default::default();
        }
        if strip_shipping {
            owned.shipping_cost = Money::zero();
        }
        Cow::Owned(owned)
    }

    /// Prices a document under this variant.
    ///
    /// ## Example
    /// ```rust
    /// use docforge_core::currency::Currency;
    /// use docforge_core::variant::DocumentVariant;
    /// use docforge_core::{DiscountMode, LineItem, Money, PricingInput, Rate};
    /// use rust_decimal_macros::dec;
    ///
    /// let input = PricingInput {
    ///     line_items: vec![LineItem::new("Widget", dec!(3), Money::from_cents(1000))],
    ///     discount_mode: DiscountMode::Percentage,
    ///     discount_value: dec!(10),
    ///     shipping_cost: Money::from_cents(500),
    ///     tax_rate: Rate::from_bps(800),
    /// };
    ///
    /// let quote = DocumentVariant::quotation(Currency::Usd).price(&input);
    /// assert_eq!(quote.total, Money::from_cents(3456));
    ///
    /// // Invoices ignore discount and shipping: 30.00 + 8%
    /// let invoice = DocumentVariant::invoice(Currency::Usd).price(&input);
    /// assert_eq!(invoice.total, Money::from_cents(3240));
    /// ```
    pub fn price(&self, input: &PricingInput) -> PricingResult {
        price_with_policy(&self.effective_input(input), &self.pricing)
    }

    /// The rows of a totals block above the grand total, with signed
    /// amounts (the discount is negative).
    ///
    /// Optional rows follow the printed documents: discount only when
    /// non-zero, shipping only when positive, tax only when the rate is
    /// positive.
    pub fn total_lines(&self, input: &PricingInput, result: &PricingResult) -> Vec<TotalLine> {
        let input = self.effective_input(input);
        let mut lines = vec![TotalLine::new("Subtotal", result.subtotal)];

        if !result.discount_amount.is_zero() {
            let label = match input.discount_mode {
                DiscountMode::Percentage => {
                    format!("Discount ({}%)", input.discount_value.normalize())
                }
                _ => "Discount".to_string(),
            };
            lines.push(TotalLine::new(label, -result.discount_amount));
        }

        if input.shipping_cost.is_positive() {
            lines.push(TotalLine::new("Shipping", input.shipping_cost));
        }

        if !input.tax_rate.is_zero() && !input.tax_rate.is_negative() {
            lines.push(TotalLine::new(
                format!("{} ({}%)", self.tax_label, input.tax_rate),
                result.tax_amount,
            ));
        }

        lines
    }

    /// Formats a priced document's totals block in the variant's currency.
    pub fn format_totals(&self, input: &PricingInput, result: &PricingResult) -> FormattedTotals {
        let rows = self
            .total_lines(input, result)
            .into_iter()
            .map(|line| TotalRow {
                amount: self.currency.format(line.amount),
                label: line.label,
            })
            .collect();

        FormattedTotals {
            rows,
            total: TotalRow {
                label: "Total".to_string(),
                amount: self.currency.format(result.total),
            },
        }
    }
}

// =============================================================================
// Formatted Totals
// =============================================================================

/// A totals row before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TotalLine {
    pub label: String,
    pub amount: Money,
}

impl TotalLine {
    fn new(label: impl Into<String>, amount: Money) -> Self {
        TotalLine {
            label: label.into(),
            amount,
        }
    }
}

/// A label and its formatted amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TotalRow {
    pub label: String,
    pub amount: String,
}

/// The totals block of an invoice or quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FormattedTotals {
    /// Subtotal and the optional discount/shipping/tax rows, in order.
    pub rows: Vec<TotalRow>,
    pub total: TotalRow,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, Rate};
    use rust_decimal_macros::dec;

    fn widget_quote() -> PricingInput {
        PricingInput {
            line_items: vec![LineItem::new("Widget", dec!(3), Money::from_cents(1000))],
            discount_mode: DiscountMode::Percentage,
            discount_value: dec!(10),
            shipping_cost: Money::from_cents(500),
            tax_rate: Rate::from_bps(800),
        }
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(DocumentKind::Invoice.number_prefix(), "INV");
        assert_eq!(DocumentKind::Quotation.number_prefix(), "QUO");
        assert_eq!(DocumentKind::SalarySlip.title(), "SALARY SLIP");
        assert_eq!(DocumentKind::SalarySlip.to_string(), "SalarySlip");
        assert_eq!(DocumentKind::Receipt.number_prefix(), "REC");
        assert_eq!(DocumentKind::Receipt.title(), "RECEIPT");
    }

    #[test]
    fn test_tax_label_parse() {
        assert_eq!(TaxLabel::parse("gst"), TaxLabel::Gst);
        assert_eq!(TaxLabel::parse("Sales Tax"), TaxLabel::SalesTax);
        assert_eq!(TaxLabel::parse(""), TaxLabel::Tax);
        assert_eq!(TaxLabel::parse("hst"), TaxLabel::Custom("hst".to_string()));
        assert_eq!(TaxLabel::parse("hst").to_string(), "HST");
    }

    #[test]
    fn test_quotation_uses_full_pipeline() {
        let variant = DocumentVariant::quotation(Currency::Usd);
        let result = variant.price(&widget_quote());
        assert_eq!(result.discount_amount, Money::from_cents(300));
        assert_eq!(result.total, Money::from_cents(3456));
    }

    #[test]
    fn test_invoice_neutralizes_discount_and_shipping() {
        let variant = DocumentVariant::invoice(Currency::Inr);
        let input = widget_quote();
        assert!(matches!(variant.effective_input(&input), Cow::Owned(_)));

        let result = variant.price(&input);
        assert_eq!(result.discount_amount, Money::zero());
        assert_eq!(result.taxable_amount, Money::from_cents(3000));
        assert_eq!(result.total, Money::from_cents(3240));
    }

    #[test]
    fn test_effective_input_borrows_when_unchanged() {
        let variant = DocumentVariant::quotation(Currency::Usd);
        let input = widget_quote();
        assert!(matches!(variant.effective_input(&input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_variant_policy_is_applied() {
        let mut input = widget_quote();
        input.discount_mode = DiscountMode::Fixed;
        input.discount_value = dec!(100);

        let clamped = DocumentVariant::quotation(Currency::Usd).with_pricing(PricingPolicy {
            clamp_discount: true,
            ..Default::default()
        });
        assert_eq!(clamped.price(&input).taxable_amount, Money::from_cents(500));
    }

    #[test]
    fn test_format_totals_quotation() {
        let variant = DocumentVariant::quotation(Currency::Usd);
        let input = widget_quote();
        let totals = variant.format_totals(&input, &variant.price(&input));

        let rows: Vec<(&str, &str)> = totals
            .rows
            .iter()
            .map(|row| (row.label.as_str(), row.amount.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Subtotal", "$30.00"),
                ("Discount (10%)", "-$3.00"),
                ("Shipping", "$5.00"),
                ("Tax (8%)", "$2.56"),
            ]
        );
        assert_eq!(totals.total.amount, "$34.56");
    }

    #[test]
    fn test_total_lines_are_signed() {
        let variant = DocumentVariant::quotation(Currency::Usd);
        let mut input = widget_quote();
        input.discount_mode = DiscountMode::Fixed;
        input.discount_value = dec!(4);
        let lines = variant.total_lines(&input, &variant.price(&input));

        assert_eq!(lines[1].label, "Discount");
        assert_eq!(lines[1].amount, Money::from_cents(-400));
    }

    #[test]
    fn test_format_totals_invoice() {
        let variant = DocumentVariant::invoice(Currency::Eur).with_tax_label(TaxLabel::Vat);
        let mut input = widget_quote();
        input.tax_rate = Rate::zero();
        let totals = variant.format_totals(&input, &variant.price(&input));

        assert_eq!(totals.rows.len(), 1);
        assert_eq!(totals.total.amount, "€30.00");

        input.tax_rate = Rate::from_bps(2000);
        let totals = variant.format_totals(&input, &variant.price(&input));
        assert_eq!(totals.rows[1].label, "VAT (20%)");
        assert_eq!(totals.rows[1].amount, "€6.00");
    }
}
