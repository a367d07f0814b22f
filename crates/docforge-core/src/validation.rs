//! # Validation Module
//!
//! Turns raw form values into typed engine input and checks preconditions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form host                                                     │
//! │  ├── Collects raw strings (possibly blank)                              │
//! │  └── THIS MODULE: parse_amount / parse_days                             │
//! │           │        blank → 0 (or default), garbage → InvalidFormat      │
//! │           ▼                                                             │
//! │  Layer 2: Preconditions                                                 │
//! │  ├── Required text fields                                               │
//! │  ├── Amounts and rates between zero and their ceilings                  │
//! │  └── At least one billable line item                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                        │
//! │  └── Attendance::new, compute_payroll (fail fast, never coerce)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use docforge_core::validation::{parse_amount, validate_required};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(parse_amount("shipping", Some("12.50")).unwrap(), dec!(12.50));
//! assert_eq!(parse_amount("shipping", Some("")).unwrap(), dec!(0));
//! assert!(validate_required("client name", "  ").is_err());
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::pricing::billable_items;
use crate::types::{DiscountMode, LineItem, PricingInput, Rate};
use crate::{MAX_AMOUNT, MAX_LINE_ITEMS, MAX_PERCENT, MAX_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Raw Value Parsing
// =============================================================================

/// Parses a numeric form field.
///
/// Missing or blank input is zero. Anything else must be a number:
/// "12abc" is rejected rather than read as 12 or 0. Numbers beyond
/// ±[`MAX_AMOUNT`] are rejected as out of range.
///
/// ## Example
/// ```rust
/// use docforge_core::validation::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("rate", Some(" 1,250.75 ")).unwrap(), dec!(1250.75));
/// assert_eq!(parse_amount("rate", None).unwrap(), dec!(0));
/// assert!(parse_amount("rate", Some("12abc")).is_err());
/// ```
pub fn parse_amount(field: &str, raw: Option<&str>) -> ValidationResult<Decimal> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(Decimal::ZERO),
        Some(value) => value,
    };

    // Grouping commas are common in pasted figures.
    let cleaned = raw.replace(',', "");

    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{}' is not a number", raw),
        })?;

    if value.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: -MAX_AMOUNT,
            max: MAX_AMOUNT,
        });
    }
    Ok(value)
}

/// Parses a day-count field. Blank input yields `default`.
///
/// ## Example
/// ```rust
/// use docforge_core::validation::parse_days;
///
/// assert_eq!(parse_days("working days", Some("26"), 30).unwrap(), 26);
/// assert_eq!(parse_days("working days", Some(""), 30).unwrap(), 30);
/// assert!(parse_days("working days", Some("-2"), 30).is_err());
/// ```
pub fn parse_days(field: &str, raw: Option<&str>, default: u32) -> ValidationResult<u32> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(value) => value,
    };

    raw.parse::<u32>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("'{}' is not a whole number of days", raw),
        })
        .and_then(|days| {
            if days > 366 {
                Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    min: 0,
                    max: 366,
                })
            } else {
                Ok(days)
            }
        })
}

// =============================================================================
// Field Validators
// =============================================================================

/// A required text field must contain something other than whitespace.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// A basic salary of zero makes no slip.
pub fn validate_positive(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a money amount: zero up to [`MAX_AMOUNT`].
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    validate_non_negative(field, amount)?;
    validate_at_most(field, amount.decimal(), MAX_AMOUNT)
}

/// Validates a tax or discount percentage: zero up to [`MAX_PERCENT`].
///
/// A discount above 100% passes; whether it is honoured or capped is the
/// pricing policy's call (`PricingPolicy::clamp_discount`).
pub fn validate_rate(field: &str, rate: Rate) -> ValidationResult<()> {
    if rate.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }
    validate_at_most(field, rate.percent(), MAX_PERCENT)
}

fn validate_at_most(field: &str, value: Decimal, max: i64) -> ValidationResult<()> {
    if value > Decimal::from(max) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max,
        });
    }
    Ok(())
}

/// Validates the item list of an invoice or quotation.
///
/// ## Rules
/// - At least one row with a description
/// - At most [`MAX_LINE_ITEMS`] rows
/// - Quantity of every billed row is between 0 and [`MAX_QUANTITY`]
/// - Rate of every billed row is between 0 and [`MAX_AMOUNT`]
///
/// ## Example
/// ```rust
/// use docforge_core::validation::validate_line_items;
/// use docforge_core::{LineItem, Money};
/// use rust_decimal_macros::dec;
///
/// assert!(validate_line_items(&[LineItem::new("Widget", dec!(1), Money::zero())]).is_ok());
/// assert!(validate_line_items(&[LineItem::new("", dec!(1), Money::zero())]).is_err());
/// ```
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.len() > MAX_LINE_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "line items".to_string(),
            min: 1,
            max: MAX_LINE_ITEMS as i64,
        });
    }

    let mut billed = 0;
    for item in billable_items(items) {
        billed += 1;
        let description = item.description.trim();
        if item.quantity < Decimal::ZERO {
            return Err(ValidationError::MustBeNonNegative {
                field: format!("quantity of '{}'", description),
            });
        }
        validate_at_most(&format!("quantity of '{}'", description), item.quantity, MAX_QUANTITY)?;
        validate_amount(&format!("rate of '{}'", description), item.unit_rate)?;
    }

    if billed == 0 {
        return Err(ValidationError::Required {
            field: "line items".to_string(),
        });
    }

    Ok(())
}

/// Validates a complete pricing input before it reaches the pipeline.
pub fn validate_pricing_input(input: &PricingInput) -> ValidationResult<()> {
    validate_line_items(&input.line_items)?;

    match input.discount_mode {
        DiscountMode::None => {}
        DiscountMode::Percentage => {
            validate_rate("discount", Rate::from_percent(input.discount_value))?
        }
        DiscountMode::Fixed => {
            validate_amount("discount", Money::from_decimal(input.discount_value))?
        }
    }

    validate_amount("shipping cost", input.shipping_cost)?;
    validate_rate("tax rate", input.tax_rate)
}

// =============================================================================
// Unit Tests
// =============================================================================
