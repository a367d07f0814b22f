//! # Currency / Number Formatter
//!
//! Turns amounts into display text.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_currency(1234.5, "USD")   ──►  "$1234.50"     (no grouping)     │
//! │  format_currency(1234.5, "ZZZ")   ──►  "$1234.50"     (unknown → $)     │
//! │  format_inr(1234567.891)          ──►  "₹12,34,567.89" (lakh/crore)     │
//! │  number_to_words(12_34_56_789)    ──►  "Twelve Crore Thirty Four Lakh   │
//! │                                        Fifty Six Thousand Seven         │
//! │                                        Hundred Eighty Nine"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Symbol used when a currency code is not recognized.
pub const FALLBACK_SYMBOL: &str = "$";

// =============================================================================
// Currency
// =============================================================================

/// The closed set of currencies the generators offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Cad,
    Aud,
}

impl Currency {
    /// All supported currencies, in menu order.
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
        Currency::Cad,
        Currency::Aud,
    ];

    /// Looks up a currency by ISO 4217 code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    /// Display symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    /// Formats an amount in this currency (see [`format_currency`]).
    pub fn format(&self, amount: Money) -> String {
        with_symbol(self.symbol(), &amount.to_string())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| format!("unsupported currency code: {}", s))
    }
}

/// Symbol for a currency code; unknown codes fall back to `$`.
pub fn symbol_for_code(code: &str) -> &'static str {
    Currency::from_code(code)
        .map(|c| c.symbol())
        .unwrap_or(FALLBACK_SYMBOL)
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats `amount` with the symbol for `currency_code` and exactly two
/// decimals. No digit grouping.
///
/// ## Example
/// ```rust
/// use docforge_core::currency::format_currency;
/// use docforge_core::Money;
/// use rust_decimal_macros::dec;
///
/// let amount = Money::from_decimal(dec!(1234.5));
/// assert_eq!(format_currency(amount, "USD"), "$1234.50");
/// assert_eq!(format_currency(amount, "ZZZ"), "$1234.50");
/// assert_eq!(format_currency(-amount, "EUR"), "-€1234.50");
/// ```
pub fn format_currency(amount: Money, currency_code: &str) -> String {
    with_symbol(symbol_for_code(currency_code), &amount.to_string())
}

/// Formats `amount` in rupees with Indian digit grouping.
///
/// The last three integer digits form one group; every group above them has
/// two digits (thousand, lakh, crore).
///
/// ## Example
/// ```rust
/// use docforge_core::currency::format_inr;
/// use docforge_core::Money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_inr(Money::from_decimal(dec!(1234567.891))), "₹12,34,567.89");
/// assert_eq!(format_inr(Money::from_decimal(dec!(999))), "₹999.00");
/// ```
pub fn format_inr(amount: Money) -> String {
    let plain = amount.to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!(
        "{}{}{}.{}",
        sign,
        Currency::Inr.symbol(),
        group_indian(integer),
        fraction
    )
}

/// Inserts Indian grouping separators into a string of integer digits.
///
/// ```rust
/// use docforge_core::currency::group_indian;
///
/// assert_eq!(group_indian("100000"), "1,00,000");
/// assert_eq!(group_indian("10000000"), "1,00,00,000");
/// assert_eq!(group_indian("999"), "999");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Prefixes the symbol, keeping the sign in front: `-$3.00`.
fn with_symbol(symbol: &str, plain: &str) -> String {
    match plain.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, plain),
    }
}

// =============================================================================
// Amount in Words
// =============================================================================

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

/// Spells out a whole amount using Indian magnitude groups.
///
/// Crore counts above 999 are spelled with the same algorithm, so
/// 10,000,000,000 becomes "One Thousand Crore".
///
/// ## Example
/// ```rust
/// use docforge_core::currency::number_to_words;
///
/// assert_eq!(number_to_words(0), "Zero");
/// assert_eq!(number_to_words(100), "One Hundred");
/// assert_eq!(number_to_words(100_000), "One Lakh");
/// assert_eq!(number_to_words(10_000_000), "One Crore");
/// assert_eq!(number_to_words(215), "Two Hundred Fifteen");
/// ```
pub fn number_to_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }

    let mut words: Vec<&'static str> = Vec::new();
    push_indian_groups(amount, &mut words);
    words.join(" ")
}

fn push_indian_groups(mut n: u64, words: &mut Vec<&'static str>) {
    let crore = n / CRORE;
    if crore > 0 {
        if crore > 999 {
            push_indian_groups(crore, words);
        } else {
            push_hundreds(crore, words);
        }
        words.push("Crore");
        n %= CRORE;
    }

    let lakh = n / LAKH;
    if lakh > 0 {
        push_hundreds(lakh, words);
        words.push("Lakh");
        n %= LAKH;
    }

    let thousand = n / THOUSAND;
    if thousand > 0 {
        push_hundreds(thousand, words);
        words.push("Thousand");
        n %= THOUSAND;
    }

    if n > 0 {
        push_hundreds(n, words);
    }
}

/// Words for 1..=999.
fn push_hundreds(mut n: u64, words: &mut Vec<&'static str>) {
    if n >= 100 {
        words.push(ONES[(n / 100) as usize]);
        words.push("Hundred");
        n %= 100;
    }

    if n >= 20 {
        words.push(TENS[(n / 10) as usize]);
        n %= 10;
    } else if n >= 10 {
        words.push(TEENS[(n - 10) as usize]);
        return;
    }

    if n > 0 {
        words.push(ONES[n as usize]);
    }
}

/// Spells out a money amount after rounding to the nearest whole unit.
///
/// ## Errors
/// - [`CoreError::NegativeAmount`] for amounts below zero (after rounding)
/// - [`CoreError::AmountTooLarge`] when the rounded amount exceeds `u64`
///
/// ## Example
/// ```rust
/// use docforge_core::currency::amount_in_words;
/// use docforge_core::Money;
///
/// // 45,833.50 rounds up
/// let words = amount_in_words(Money::from_cents(4_583_350)).unwrap();
/// assert_eq!(words, "Forty Five Thousand Eight Hundred Thirty Four");
/// assert!(amount_in_words(Money::from_cents(-100)).is_err());
/// ```
pub fn amount_in_words(amount: Money) -> CoreResult<String> {
    let whole = amount.round_to_units();
    if whole.is_negative() {
        return Err(CoreError::NegativeAmount {
            field: "amount in words".to_string(),
            amount: amount.to_string(),
        });
    }

    let units = whole
        .decimal()
        .to_u64()
        .ok_or_else(|| CoreError::AmountTooLarge {
            amount: amount.to_string(),
        })?;

    Ok(number_to_words(units))
}

// =============================================================================
// Unit Tests
// =============================================================================
