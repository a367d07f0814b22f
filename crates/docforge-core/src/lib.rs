//! # docforge-core: Document Financial Engine
//!
//! Every document generator (invoice, quotation, salary slip) runs the same
//! arithmetic: add up line items, take a discount, add shipping, add tax, or
//! pro-rate a salary by attendance. This crate holds that arithmetic once, as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Docforge Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Form Host (browser / CLI)                    │   │
//! │  │    field edit ──► raw values ──► preview ──► export            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ explicit input records                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ docforge-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │   │
//! │  │   │ currency │ │ pricing  │ │ payroll  │ │ variant  │         │   │
//! │  │   │ symbols  │ │ subtotal │ │ PF / ESI │ │ invoice  │         │   │
//! │  │   │ words    │ │ discount │ │ pro-rata │ │ quotation│         │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO SHARED STATE • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ result records + formatted text        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              docforge-export (HTML / Word / CSV)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Data model (LineItem, PricingInput, PayrollComponents, ...)
//! - [`money`] - Money type over exact decimals
//! - [`currency`] - Currency symbols, Indian grouping, amount in words
//! - [`pricing`] - Line-item aggregation and the discount/shipping/tax pipeline
//! - [`payroll`] - Gross, statutory deductions and attendance pro-ration
//! - [`variant`] - Per-document configuration of the engine
//! - [`validation`] - Form value parsing and precondition checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Recompute, never update**: results are built fresh from raw inputs
//! 3. **Exact Money**: decimal arithmetic, rounding only where a policy says so
//! 4. **Explicit Errors**: precondition violations are typed errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use docforge_core::pricing::price;
//! use docforge_core::{DiscountMode, LineItem, Money, PricingInput, Rate};
//! use rust_decimal_macros::dec;
//!
//! let input = PricingInput {
//!     line_items: vec![LineItem::new("Widget", dec!(3), Money::from_cents(1000))],
//!     discount_mode: DiscountMode::Percentage,
//!     discount_value: dec!(10),
//!     shipping_cost: Money::from_cents(500),
//!     tax_rate: Rate::from_bps(800), // 8%
//! };
//!
//! let result = price(&input);
//! assert_eq!(result.total, Money::from_decimal(dec!(34.56)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod money;
pub mod payroll;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod variant;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Provident fund rate in basis points (12% of basic salary).
pub const PROVIDENT_FUND_BPS: u32 = 1200;

/// State insurance rate in basis points (0.75% of gross salary).
pub const STATE_INSURANCE_BPS: u32 = 75;

/// Working days assumed when the attendance fields are left blank.
pub const DEFAULT_WORKING_DAYS: u32 = 30;

/// Maximum line items accepted on a single document.
///
/// ## Business Reason
/// Keeps previews and exports to a printable size. The engine itself has no
/// limit; this is enforced by [`validation::validate_line_items`].
pub const MAX_LINE_ITEMS: usize = 100;

/// Largest amount (rate, shipping, salary component, deduction) accepted
/// from a form, in major units.
///
/// ## Business Reason
/// With quantities capped at [`MAX_QUANTITY`] and percentages at
/// [`MAX_PERCENT`], every intermediate product of the pricing and payroll
/// pipelines stays far inside `Decimal`'s range, so the engine never
/// overflows.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Largest line-item quantity accepted from a form.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Largest tax or discount percentage accepted from a form.
pub const MAX_PERCENT: i64 = 10_000;
