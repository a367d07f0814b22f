//! # Domain Types
//!
//! The data model the engine computes over.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  PricingInput   │   │  PricingResult  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  description    │──►│  line_items     │──►│  subtotal       │       │
//! │  │  quantity       │   │  discount_mode  │   │  discount_amount│       │
//! │  │  unit_rate      │   │  shipping_cost  │   │  taxable_amount │       │
//! │  └─────────────────┘   │  tax_rate       │   │  tax_amount     │       │
//! │                        └─────────────────┘   │  total          │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │PayrollComponents│   │ DeductionPolicy │   │  PayrollResult  │       │
//! │  │  basic, HRA ... │──►│  PF / ESI flags │──►│  gross, net     │       │
//! │  └─────────────────┘   │  flat lines     │   │  breakdown      │       │
//! │          ▲             └─────────────────┘   └─────────────────┘       │
//! │          │  Attendance (present / working days)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Every record is built fresh from the current form values at the moment of
//! preview or export and dropped afterwards. Nothing is updated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage (8.25 means 8.25%).
///
/// ## Why not basis points?
/// Statutory rates fit basis points (12% = 1200, 0.75% = 75), and
/// [`Rate::from_bps`] is kept for them, but users type arbitrary discount
/// and tax percentages into forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(#[ts(type = "string")] Decimal);

impl Rate {
    /// Creates a rate from basis points (1 bps = 0.01%).
    #[inline]
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::new(i64::from(bps), 2))
    }

    /// Creates a rate from a percentage value.
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        Rate(percent)
    }

    /// Returns the rate as a percentage (8.25 for 8.25%).
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the rate is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

/// Shows the percentage without trailing zeros, the way labels print it:
/// `Tax (8%)`, `GST (12.5%)`.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of an invoice or quotation.
///
/// The amount is never stored: [`LineItem::amount`] recomputes it from
/// quantity and rate every time, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item or service description. Blank rows are not billed.
    pub description: String,

    /// Quantity (fractional quantities are allowed).
    #[ts(type = "string")]
    pub quantity: Decimal,

    /// Price per unit.
    pub unit_rate: Money,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_rate: Money) -> Self {
        LineItem {
            description: description.into(),
            quantity,
            unit_rate,
        }
    }

    /// Quantity × unit rate.
    #[inline]
    pub fn amount(&self) -> Money {
        self.unit_rate.multiply_quantity(self.quantity)
    }

    /// A row whose description is empty or whitespace-only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// How the discount value on a document is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMode {
    /// No discount; the discount value is ignored.
    #[default]
    None,
    /// Discount value is a percentage of the subtotal.
    Percentage,
    /// Discount value is an amount in the document currency.
    Fixed,
}

/// Everything the pricing pipeline needs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    /// Rows in display order. Order does not affect any total.
    pub line_items: Vec<LineItem>,

    pub discount_mode: DiscountMode,

    /// Percentage or amount depending on `discount_mode`.
    #[ts(type = "string")]
    pub discount_value: Decimal,

    /// Shipping/handling, added before tax.
    pub shipping_cost: Money,

    pub tax_rate: Rate,
}

/// Output of the pricing pipeline. All fields are derived.
///
/// ## Invariant
/// `total == subtotal - discount_amount + shipping_cost + tax_amount`
/// and `taxable_amount == subtotal - discount_amount + shipping_cost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub taxable_amount: Money,
    pub tax_amount: Money,
    pub total: Money,
}

// =============================================================================
// Payroll
// =============================================================================

/// Monthly earnings components of a salary slip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayrollComponents {
    pub basic_salary: Money,
    /// House rent allowance (HRA).
    pub housing_allowance: Money,
    pub conveyance_allowance: Money,
    pub medical_allowance: Money,
    pub special_allowance: Money,
    pub other_allowances: Money,
}

impl PayrollComponents {
    /// Sum of all components, before attendance pro-ration.
    pub fn gross(&self) -> Money {
        self.lines().iter().map(|(_, amount)| *amount).sum()
    }

    /// Components with their display labels, in slip order.
    pub fn lines(&self) -> [(&'static str, Money); 6] {
        [
            ("Basic Salary", self.basic_salary),
            ("HRA", self.housing_allowance),
            ("Conveyance Allowance", self.conveyance_allowance),
            ("Medical Allowance", self.medical_allowance),
            ("Special Allowance", self.special_allowance),
            ("Other Allowances", self.other_allowances),
        ]
    }
}

/// Deduction settings of a salary slip.
///
/// Provident fund and state insurance are either computed from statutory
/// rates (flag enabled) or taken from the manual value (flag disabled,
/// missing manual value = zero). The remaining lines are entered directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeductionPolicy {
    pub provident_fund_enabled: bool,
    pub state_insurance_enabled: bool,
    pub manual_provident_fund: Option<Money>,
    pub manual_state_insurance: Option<Money>,
    pub professional_tax: Money,
    pub income_tax: Money,
    pub loan_deduction: Money,
    pub other_deductions: Money,
}

/// Days worked against days in the pay period.
///
/// Fields are private: an `Attendance` always satisfies
/// `working_days > 0` and `present_days <= working_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    working_days: u32,
    present_days: u32,
}

impl Attendance {
    /// Validates and creates an attendance record.
    ///
    /// ## Errors
    /// - `working_days == 0`: the ratio would divide by zero
    /// - `present_days > working_days`
    ///
    /// ## Example
    /// ```rust
    /// use docforge_core::types::Attendance;
    ///
    /// assert!(Attendance::new(30, 25).is_ok());
    /// assert!(Attendance::new(0, 0).is_err());
    /// assert!(Attendance::new(30, 31).is_err());
    /// ```
    pub fn new(working_days: u32, present_days: u32) -> CoreResult<Self> {
        if working_days == 0 {
            return Err(CoreError::InvalidAttendance {
                working_days,
                present_days,
                reason: "working days must be positive".to_string(),
            });
        }

        if present_days > working_days {
            return Err(CoreError::InvalidAttendance {
                working_days,
                present_days,
                reason: "present days cannot exceed working days".to_string(),
            });
        }

        Ok(Attendance {
            working_days,
            present_days,
        })
    }

    /// Full attendance for a period of `working_days`.
    pub fn full(working_days: u32) -> CoreResult<Self> {
        Attendance::new(working_days, working_days)
    }

    #[inline]
    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    #[inline]
    pub fn present_days(&self) -> u32 {
        self.present_days
    }

    /// `present_days / working_days`.
    pub fn ratio(&self) -> Decimal {
        Decimal::from(self.present_days) / Decimal::from(self.working_days)
    }

    /// Scales an amount by the attendance ratio.
    pub fn pro_rate(&self, amount: Money) -> Money {
        // working_days > 0 is a constructor invariant
        amount
            .scale(self.present_days, self.working_days)
            .unwrap_or(amount)
    }
}

/// One displayed earning or deduction row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayLine {
    pub label: String,
    pub amount: Money,
    /// Whether `amount` was scaled by the attendance ratio.
    pub prorated: bool,
}

/// Output of the payroll engine.
///
/// `gross_salary`, `total_deductions` and `net_salary` are pro-rated;
/// `full_gross` and `full_deductions` are the same sums before pro-ration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    pub gross_salary: Money,
    pub total_deductions: Money,
    pub net_salary: Money,

    #[ts(type = "string")]
    pub ratio: Decimal,
    pub full_gross: Money,
    pub full_deductions: Money,

    /// Resolved provident fund, before pro-ration.
    pub provident_fund: Money,
    /// Resolved state insurance, before pro-ration.
    pub state_insurance: Money,

    pub earnings: Vec<PayLine>,
    pub deductions: Vec<PayLine>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_from_bps() {
        assert_eq!(Rate::from_bps(825).percent(), dec!(8.25));
        assert_eq!(Rate::from_bps(75).percent(), dec!(0.75));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_bps(800).to_string(), "8");
        assert_eq!(Rate::from_percent(dec!(12.50)).to_string(), "12.5");
    }

    #[test]
    fn test_line_item_amount() {
        let item = LineItem::new("Widget", dec!(3), Money::from_cents(1000));
        assert_eq!(item.amount(), Money::from_cents(3000));

        let half = LineItem::new("Consulting", dec!(1.5), Money::from_cents(333));
        assert_eq!(half.amount().decimal(), dec!(4.995));
    }

    #[test]
    fn test_line_item_blank() {
        assert!(LineItem::new("   ", dec!(1), Money::from_cents(100)).is_blank());
        assert!(!LineItem::new("Widget", dec!(0), Money::zero()).is_blank());
    }

    #[test]
    fn test_discount_mode_default() {
        assert_eq!(DiscountMode::default(), DiscountMode::None);
    }

    #[test]
    fn test_components_gross() {
        let components = PayrollComponents {
            basic_salary: Money::from_major_minor(20_000, 0),
            housing_allowance: Money::from_major_minor(8_000, 0),
            conveyance_allowance: Money::from_major_minor(1_600, 0),
            medical_allowance: Money::from_major_minor(1_250, 0),
            special_allowance: Money::zero(),
            other_allowances: Money::from_major_minor(150, 0),
        };
        assert_eq!(components.gross(), Money::from_major_minor(31_000, 0));
    }

    #[test]
    fn test_attendance_ratio() {
        let attendance = Attendance::new(30, 15).unwrap();
        assert_eq!(attendance.ratio(), dec!(0.5));
        assert_eq!(
            attendance.pro_rate(Money::from_cents(1000)),
            Money::from_cents(500)
        );
    }

    #[test]
    fn test_attendance_rejects_zero_working_days() {
        let err = Attendance::new(0, 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAttendance { .. }));
    }

    #[test]
    fn test_attendance_rejects_overshoot() {
        assert!(Attendance::new(30, 31).is_err());
        assert!(Attendance::full(22).is_ok());
    }
}
