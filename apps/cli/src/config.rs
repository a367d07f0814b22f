//! Host configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! The engine itself reads no environment; everything here ends up as an
//! explicit policy value passed into it.

use docforge_core::currency::Currency;
use docforge_core::payroll::{DeductionProration, PayrollPolicy};
use docforge_core::pricing::{PricingPolicy, RoundingMode};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Form host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Currency for invoices and quotations whose form leaves it blank
    pub currency: Currency,

    /// Pricing pipeline knobs (discount clamp, rounding)
    pub pricing: PricingPolicy,

    /// Payroll knobs (which deductions follow attendance)
    pub payroll: PayrollPolicy,

    /// Directory artifacts are written to
    pub output_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            currency: Currency::Usd,
            pricing: PricingPolicy::default(),
            payroll: PayrollPolicy::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl HostConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name))
    }

    /// Load configuration through `var`, which has the shape of `env::var`.
    pub fn load_from<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let config = HostConfig {
            currency: var("DOCFORGE_CURRENCY")
                .unwrap_or_else(|_| "USD".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DOCFORGE_CURRENCY".to_string()))?,

            pricing: PricingPolicy {
                clamp_discount: var("DOCFORGE_CLAMP_DISCOUNT")
                    .unwrap_or_else(|_| "false".to_string())
                    .trim()
                    .parse()
                    .map_err(|_| {
                        ConfigError::InvalidValue("DOCFORGE_CLAMP_DISCOUNT".to_string())
                    })?,

                rounding: parse_rounding(
                    &var("DOCFORGE_ROUNDING").unwrap_or_else(|_| "deferred".to_string()),
                )
                .ok_or_else(|| ConfigError::InvalidValue("DOCFORGE_ROUNDING".to_string()))?,
            },

            payroll: PayrollPolicy {
                deduction_proration: parse_proration(
                    &var("DOCFORGE_DEDUCTION_PRORATION")
                        .unwrap_or_else(|_| "uniform".to_string()),
                )
                .ok_or_else(|| {
                    ConfigError::InvalidValue("DOCFORGE_DEDUCTION_PRORATION".to_string())
                })?,
            },

            output_dir: var("DOCFORGE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        };

        Ok(config)
    }
}

fn parse_rounding(raw: &str) -> Option<RoundingMode> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "deferred" => Some(RoundingMode::Deferred),
        "per_step" => Some(RoundingMode::PerStep),
        _ => None,
    }
}

fn parse_proration(raw: &str) -> Option<DeductionProration> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "uniform" => Some(DeductionProration::Uniform),
        "pay_linked_only" => Some(DeductionProration::PayLinkedOnly),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
