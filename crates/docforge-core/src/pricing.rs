//! # Pricing Pipeline
//!
//! Line-item aggregation and the invoice/quotation totals pipeline.
//!
//! ## Pipeline Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  line items ──► [1] subtotal   = Σ qty × rate  (blank rows skipped)     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                 [2] discount   = subtotal × v / 100   (Percentage)      │
//! │                                = v                    (Fixed)           │
//! │                                = 0                    (None)            │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                 [3] taxable    = subtotal − discount + shipping         │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                 [4] tax        = taxable × rate / 100                   │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                 [5] total      = taxable + tax                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order is part of the contract. Shipping is taxed; the discount
//! applies to goods only.
//!
//! ## Discount Overshoot
//! A discount larger than the subtotal is applied as-is by default, which
//! yields a negative taxable amount, negative tax and a negative total.
//! [`PricingPolicy::clamp_discount`] caps the discount at the subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{DiscountMode, LineItem, PricingInput, PricingResult, Rate};

// =============================================================================
// Policy
// =============================================================================

/// When intermediate amounts are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Keep full precision; round only for display.
    #[default]
    Deferred,
    /// Round each line amount, the discount and the tax as they are produced.
    PerStep,
}

/// Knobs of the pricing pipeline. The default reproduces the reference
/// arithmetic exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Cap the discount at the subtotal so the taxable amount never drops
    /// below the shipping cost.
    pub clamp_discount: bool,
    pub rounding: RoundingMode,
}

impl PricingPolicy {
    fn step(&self, amount: Money) -> Money {
        match self.rounding {
            RoundingMode::Deferred => amount,
            RoundingMode::PerStep => amount.round_to_cents(),
        }
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// The rows that are billed: everything with a non-blank description.
///
/// Renderers iterate this so that the rows shown and the subtotal agree.
pub fn billable_items(items: &[LineItem]) -> impl Iterator<Item = &LineItem> + '_ {
    items.iter().filter(|item| !item.is_blank())
}

/// Sums `quantity × unit_rate` over the billable rows.
///
/// Zero and negative values are summed as given; rejecting them is a
/// validation concern.
///
/// ## Example
/// ```rust
/// use docforge_core::pricing::aggregate;
/// use docforge_core::{LineItem, Money};
/// use rust_decimal_macros::dec;
///
/// let items = vec![
///     LineItem::new("Widget", dec!(3), Money::from_cents(1000)),
///     LineItem::new("", dec!(5), Money::from_cents(9999)), // blank, skipped
/// ];
/// assert_eq!(aggregate(&items), Money::from_cents(3000));
/// ```
pub fn aggregate(items: &[LineItem]) -> Money {
    aggregate_with(items, &PricingPolicy::default())
}

fn aggregate_with(items: &[LineItem], policy: &PricingPolicy) -> Money {
    billable_items(items)
        .map(|item| policy.step(item.amount()))
        .sum()
}

// =============================================================================
// Pipeline
// =============================================================================

/// Runs the pipeline with the default policy (no clamp, deferred rounding).
///
/// Input is assumed to have passed
/// [`validate_pricing_input`](crate::validation::validate_pricing_input),
/// which bounds every figure so the arithmetic cannot overflow.
pub fn price(input: &PricingInput) -> PricingResult {
    price_with_policy(input, &PricingPolicy::default())
}

/// Runs the pipeline under an explicit policy.
///
/// ## Example
/// ```rust
/// use docforge_core::pricing::{price_with_policy, PricingPolicy};
/// use docforge_core::{DiscountMode, LineItem, Money, PricingInput};
/// use rust_decimal_macros::dec;
///
/// let input = PricingInput {
///     line_items: vec![LineItem::new("Widget", dec!(1), Money::from_cents(1000))],
///     discount_mode: DiscountMode::Fixed,
///     discount_value: dec!(25),
///     ..Default::default()
/// };
///
/// let clamped = PricingPolicy { clamp_discount: true, ..Default::default() };
/// let result = price_with_policy(&input, &clamped);
/// assert_eq!(result.discount_amount, Money::from_cents(1000));
/// assert_eq!(result.total, Money::zero());
/// ```
pub fn price_with_policy(input: &PricingInput, policy: &PricingPolicy) -> PricingResult {
    let subtotal = aggregate_with(&input.line_items, policy);

    let mut discount_amount =
        policy.step(discount_for(subtotal, input.discount_mode, input.discount_value));
    if policy.clamp_discount {
        discount_amount = discount_amount.min(subtotal.clamp_at_zero());
    }

    let taxable_amount = subtotal - discount_amount + input.shipping_cost;
    let tax_amount = policy.step(taxable_amount.percentage(input.tax_rate));
    let total = taxable_amount + tax_amount;

    PricingResult {
        subtotal,
        discount_amount,
        taxable_amount,
        tax_amount,
        total,
    }
}

fn discount_for(subtotal: Money, mode: DiscountMode, value: Decimal) -> Money {
    match mode {
        DiscountMode::None => Money::zero(),
        DiscountMode::Percentage => subtotal.percentage(Rate::from_percent(value)),
        DiscountMode::Fixed => Money::from_decimal(value),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_aggregate_skips_blank_rows() {
        let items = vec![
            LineItem::new("Design", dec!(2), Money::from_cents(5000)),
            LineItem::new("   ", dec!(10), Money::from_cents(100)),
            LineItem::new("Hosting", dec!(1), Money::from_cents(1250)),
        ];
        assert_eq!(aggregate(&items), Money::from_cents(11250));
        assert_eq!(billable_items(&items).count(), 2);
    }

    #[test]
    fn test_aggregate_handles_zero_values() {
        let items = vec![
            LineItem::new("Free sample", dec!(0), Money::from_cents(1000)),
            LineItem::new("Gift", dec!(4), Money::zero()),
        ];
        assert_eq!(aggregate(&items), Money::zero());
        assert_eq!(aggregate(&[]), Money::zero());
    }

    #[test]
    fn test_widget_quote_end_to_end() {
        let result = price(&widget_quote());

        assert_eq!(result.subtotal, Money::from_cents(3000));
        assert_eq!(result.discount_amount, Money::from_cents(300));
        assert_eq!(result.taxable_amount, Money::from_cents(3200));
        assert_eq!(result.tax_amount, Money::from_cents(256));
        assert_eq!(result.total, Money::from_cents(3456));
    }

    #[test]
    fn test_fixed_and_no_discount() {
        let mut input = widget_quote();
        input.discount_mode = DiscountMode::Fixed;
        input.discount_value = dec!(7.5);
        let result = price(&input);
        assert_eq!(result.discount_amount, Money::from_cents(750));
        assert_eq!(result.taxable_amount, Money::from_cents(2750));

        input.discount_mode = DiscountMode::None;
        let result = price(&input);
        assert_eq!(result.discount_amount, Money::zero());
        assert_eq!(result.taxable_amount, Money::from_cents(3500));
    }

    #[test]
    fn test_shipping_is_taxed() {
        let input = PricingInput {
            line_items: vec![],
            shipping_cost: Money::from_cents(1000),
            tax_rate: Rate::from_bps(1000),
            ..Default::default()
        };
        let result = price(&input);
        assert_eq!(result.tax_amount, Money::from_cents(100));
        assert_eq!(result.total, Money::from_cents(1100));
    }

    #[test]
    fn test_overshoot_unclamped_goes_negative() {
        let mut input = widget_quote();
        input.discount_mode = DiscountMode::Fixed;
        input.discount_value = dec!(50);
        let result = price(&input);

        // 30 - 50 + 5 = -15, tax -1.20
        assert_eq!(result.taxable_amount, Money::from_cents(-1500));
        assert_eq!(result.tax_amount, Money::from_cents(-120));
        assert_eq!(result.total, Money::from_cents(-1620));
    }

    #[test]
    fn test_overshoot_clamped_at_subtotal() {
        let mut input = widget_quote();
        input.discount_mode = DiscountMode::Fixed;
        input.discount_value = dec!(50);
        let policy = PricingPolicy {
            clamp_discount: true,
            ..Default::default()
        };
        let result = price_with_policy(&input, &policy);

        assert_eq!(result.discount_amount, Money::from_cents(3000));
        assert_eq!(result.taxable_amount, Money::from_cents(500));
        assert_eq!(result.tax_amount, Money::from_cents(40));
        assert_eq!(
            result.total,
            result.subtotal - result.discount_amount + input.shipping_cost + result.tax_amount
        );
    }

    #[test]
    fn test_clamp_does_not_touch_small_discounts() {
        let policy = PricingPolicy {
            clamp_discount: true,
            ..Default::default()
        };
        assert_eq!(
            price_with_policy(&widget_quote(), &policy),
            price(&widget_quote())
        );
    }

    #[test]
    fn test_deferred_rounding_keeps_precision() {
        let input = PricingInput {
            line_items: vec![
                LineItem::new("A", dec!(1), Money::from_decimal(dec!(0.005))),
                LineItem::new("B", dec!(1), Money::from_decimal(dec!(0.005))),
            ],
            ..Default::default()
        };
        assert_eq!(price(&input).subtotal, Money::from_cents(1));
    }

    #[test]
    fn test_per_step_rounding() {
        let input = PricingInput {
            line_items: vec![
                LineItem::new("A", dec!(1), Money::from_decimal(dec!(0.004))),
                LineItem::new("B", dec!(1), Money::from_decimal(dec!(0.004))),
            ],
            tax_rate: Rate::from_bps(825),
            ..Default::default()
        };
        let per_step = PricingPolicy {
            rounding: RoundingMode::PerStep,
            ..Default::default()
        };

        // Deferred: 0.008 → displays as 0.01. Per step: each line rounds to 0.00.
        assert_eq!(price(&input).subtotal.round_to_cents(), Money::from_cents(1));
        assert_eq!(price_with_policy(&input, &per_step).subtotal, Money::zero());

        let mut input = widget_quote();
        input.tax_rate = Rate::from_bps(825);
        let result = price_with_policy(&input, &per_step);
        // 32.00 × 8.25% = 2.64
        assert_eq!(result.tax_amount, Money::from_cents(264));
        assert_eq!(result.total, Money::from_cents(3464));
    }

    #[test]
    fn test_price_is_idempotent() {
        let input = widget_quote();
        assert_eq!(price(&input), price(&input));
    }
}
