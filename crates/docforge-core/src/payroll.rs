//! # Payroll Pro-Ration Engine
//!
//! Gross pay, statutory deductions and attendance pro-ration for salary slips.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  components ──► full gross = basic + HRA + conveyance + medical         │
//! │                              + special + other                          │
//! │                                                                         │
//! │  PF  = basic × 12%            (enabled)  | manual value or 0            │
//! │  ESI = full gross × 0.75%     (enabled)  | manual value or 0            │
//! │                                                                         │
//! │  full deductions = PF + ESI + professional tax + income tax             │
//! │                    + loan + other                                       │
//! │                                                                         │
//! │  ratio       = present days / working days                              │
//! │  gross       = full gross × ratio                                       │
//! │  deductions  = full deductions × ratio          (Uniform, default)      │
//! │              = (PF + ESI + income tax) × ratio                          │
//! │                + professional tax + loan + other  (PayLinkedOnly)       │
//! │  net         = gross − deductions                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! PF and ESI are always computed from the un-pro-rated figures and then
//! scaled with everything else.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{amount_in_words, format_inr};
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Attendance, DeductionPolicy, PayLine, PayrollComponents, PayrollResult, Rate};
use crate::validation::validate_amount;
use crate::{PROVIDENT_FUND_BPS, STATE_INSURANCE_BPS};

// =============================================================================
// Policy
// =============================================================================

/// Which deduction lines shrink with attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeductionProration {
    /// The whole deduction total is scaled by the attendance ratio,
    /// professional tax and loan repayment included.
    #[default]
    Uniform,
    /// Only pay-linked lines (PF, ESI, income tax) are scaled; professional
    /// tax, loan and other deductions are taken in full.
    PayLinkedOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPolicy {
    pub deduction_proration: DeductionProration,
}

// =============================================================================
// Statutory Deductions
// =============================================================================

/// 12% of basic salary.
pub fn provident_fund(basic_salary: Money) -> Money {
    basic_salary.percentage(Rate::from_bps(PROVIDENT_FUND_BPS))
}

/// 0.75% of gross salary.
pub fn state_insurance(gross_salary: Money) -> Money {
    gross_salary.percentage(Rate::from_bps(STATE_INSURANCE_BPS))
}

// =============================================================================
// Engine
// =============================================================================

/// Computes a salary slip with the default (uniform) pro-ration.
///
/// ## Example
/// ```rust
/// use docforge_core::payroll::compute_payroll;
/// use docforge_core::{Attendance, DeductionPolicy, Money, PayrollComponents};
///
/// let components = PayrollComponents {
///     basic_salary: Money::from_major_minor(20_000, 0),
///     ..Default::default()
/// };
/// let policy = DeductionPolicy { provident_fund_enabled: true, ..Default::default() };
///
/// let result = compute_payroll(&components, &policy, Attendance::new(30, 25).unwrap()).unwrap();
/// assert_eq!(result.provident_fund, Money::from_major_minor(2_400, 0));
/// assert_eq!(result.total_deductions, Money::from_major_minor(2_000, 0));
/// ```
pub fn compute_payroll(
    components: &PayrollComponents,
    deductions: &DeductionPolicy,
    attendance: Attendance,
) -> CoreResult<PayrollResult> {
    compute_payroll_with_policy(
        components,
        deductions,
        attendance,
        &PayrollPolicy::default(),
    )
}

/// Computes a salary slip under an explicit pro-ration policy.
///
/// ## Errors
/// [`ValidationError::MustBeNonNegative`] when any component or deduction
/// amount is negative, [`ValidationError::OutOfRange`] when one exceeds
/// [`MAX_AMOUNT`](crate::MAX_AMOUNT).
pub fn compute_payroll_with_policy(
    components: &PayrollComponents,
    deductions: &DeductionPolicy,
    attendance: Attendance,
    policy: &PayrollPolicy,
) -> CoreResult<PayrollResult> {
    check_amounts(components, deductions)?;

    let full_gross = components.gross();

    let provident_fund = if deductions.provident_fund_enabled {
        provident_fund(components.basic_salary)
    } else {
        deductions.manual_provident_fund.unwrap_or_default()
    };

    let state_insurance = if deductions.state_insurance_enabled {
        state_insurance(full_gross)
    } else {
        deductions.manual_state_insurance.unwrap_or_default()
    };

    let pay_linked = provident_fund + state_insurance + deductions.income_tax;
    let flat = deductions.professional_tax + deductions.loan_deduction + deductions.other_deductions;
    let full_deductions = pay_linked + flat;

    let gross_salary = attendance.pro_rate(full_gross);
    let total_deductions = match policy.deduction_proration {
        DeductionProration::Uniform => attendance.pro_rate(full_deductions),
        DeductionProration::PayLinkedOnly => attendance.pro_rate(pay_linked) + flat,
    };

    Ok(PayrollResult {
        gross_salary,
        total_deductions,
        net_salary: gross_salary - total_deductions,
        ratio: attendance.ratio(),
        full_gross,
        full_deductions,
        provident_fund,
        state_insurance,
        earnings: earning_lines(components, attendance),
        deductions: deduction_lines(provident_fund, state_insurance, deductions, attendance),
    })
}

fn check_amounts(
    components: &PayrollComponents,
    deductions: &DeductionPolicy,
) -> Result<(), ValidationError> {
    let manual = [
        ("PF Deduction", deductions.manual_provident_fund.unwrap_or_default()),
        ("ESI Deduction", deductions.manual_state_insurance.unwrap_or_default()),
        ("Professional Tax", deductions.professional_tax),
        ("Income Tax", deductions.income_tax),
        ("Loan Deduction", deductions.loan_deduction),
        ("Other Deductions", deductions.other_deductions),
    ];

    components
        .lines()
        .into_iter()
        .chain(manual)
        .try_for_each(|(field, amount)| validate_amount(field, amount))
}

/// Earnings rows: basic salary always, other components when non-zero.
fn earning_lines(components: &PayrollComponents, attendance: Attendance) -> Vec<PayLine> {
    components
        .lines()
        .into_iter()
        .enumerate()
        .filter(|(index, (_, amount))| *index == 0 || !amount.is_zero())
        .map(|(_, (label, amount))| PayLine {
            label: label.to_string(),
            amount: attendance.pro_rate(amount),
            prorated: true,
        })
        .collect()
}

/// Deduction rows, non-zero lines only. PF, ESI and income tax are shown
/// pro-rated; the flat lines are shown in full.
fn deduction_lines(
    provident_fund: Money,
    state_insurance: Money,
    deductions: &DeductionPolicy,
    attendance: Attendance,
) -> Vec<PayLine> {
    let rows = [
        ("PF Deduction", provident_fund, true),
        ("ESI Deduction", state_insurance, true),
        ("Professional Tax", deductions.professional_tax, false),
        ("Income Tax (TDS)", deductions.income_tax, true),
        ("Loan Deduction", deductions.loan_deduction, false),
        ("Other Deductions", deductions.other_deductions, false),
    ];

    rows.into_iter()
        .filter(|(_, amount, _)| !amount.is_zero())
        .map(|(label, amount, prorated)| PayLine {
            label: label.to_string(),
            amount: if prorated {
                attendance.pro_rate(amount)
            } else {
                amount
            },
            prorated,
        })
        .collect()
}

// =============================================================================
// Formatted Output
// =============================================================================

/// One displayed row with its amount already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FormattedLine {
    pub label: String,
    pub amount: String,
}

/// Salary slip figures ready for display in rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormattedPayroll {
    pub earnings: Vec<FormattedLine>,
    pub deductions: Vec<FormattedLine>,
    pub gross_salary: String,
    pub total_deductions: String,
    pub net_salary: String,
    /// e.g. "Forty Five Thousand Rupees Only"
    pub net_in_words: String,
}

impl FormattedPayroll {
    /// Formats a computed slip.
    ///
    /// ## Errors
    /// [`crate::CoreError::NegativeAmount`] when deductions exceed gross pay,
    /// since a negative net salary cannot be written out in words.
    pub fn from_result(result: &PayrollResult) -> CoreResult<Self> {
        let words = amount_in_words(result.net_salary)?;

        Ok(FormattedPayroll {
            earnings: format_lines(&result.earnings),
            deductions: format_lines(&result.deductions),
            gross_salary: format_inr(result.gross_salary),
            total_deductions: format_inr(result.total_deductions),
            net_salary: format_inr(result.net_salary),
            net_in_words: format!("{} Rupees Only", words),
        })
    }
}

fn format_lines(lines: &[PayLine]) -> Vec<FormattedLine> {
    lines
        .iter()
        .map(|line| FormattedLine {
            label: line.label.clone(),
            amount: format_inr(line.amount),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::MAX_AMOUNT;
    use rust_decimal_macros::dec;

    fn rupees(amount: i64) -> Money {
        Money::from_major_minor(amount, 0)
    }

    fn sample_components() -> PayrollComponents {
        PayrollComponents {
            basic_salary: rupees(20_000),
            housing_allowance: rupees(8_000),
            conveyance_allowance: rupees(1_600),
            medical_allowance: rupees(1_250),
            special_allowance: Money::zero(),
            other_allowances: rupees(1_150),
        }
    }

    fn sample_deductions() -> DeductionPolicy {
        DeductionPolicy {
            provident_fund_enabled: true,
            state_insurance_enabled: true,
            professional_tax: rupees(200),
            income_tax: rupees(1_500),
            loan_deduction: rupees(3_000),
            ..Default::default()
        }
    }

    #[test]
    fn test_provident_fund_on_unprorated_basic() {
        let components = PayrollComponents {
            basic_salary: rupees(20_000),
            ..Default::default()
        };
        let deductions = DeductionPolicy {
            provident_fund_enabled: true,
            ..Default::default()
        };
        let attendance = Attendance::new(30, 25).unwrap();

        let result = compute_payroll(&components, &deductions, attendance).unwrap();

        assert_eq!(result.provident_fund, rupees(2_400));
        assert_eq!(result.full_deductions, rupees(2_400));
        assert_eq!(result.total_deductions, rupees(2_000));
        assert_eq!(result.deductions[0].amount, rupees(2_000));
        assert_eq!(result.ratio, dec!(25) / dec!(30));
    }

    #[test]
    fn test_state_insurance_on_unprorated_gross() {
        let result = compute_payroll(
            &sample_components(),
            &sample_deductions(),
            Attendance::new(30, 15).unwrap(),
        )
        .unwrap();

        // 0.75% of 32,000
        assert_eq!(result.full_gross, rupees(32_000));
        assert_eq!(result.state_insurance, rupees(240));
        assert_eq!(result.gross_salary, rupees(16_000));
    }

    #[test]
    fn test_manual_values_when_disabled() {
        let deductions = DeductionPolicy {
            manual_provident_fund: Some(rupees(1_800)),
            manual_state_insurance: None,
            ..Default::default()
        };
        let result = compute_payroll(
            &sample_components(),
            &deductions,
            Attendance::full(30).unwrap(),
        )
        .unwrap();

        assert_eq!(result.provident_fund, rupees(1_800));
        assert_eq!(result.state_insurance, Money::zero());
        assert_eq!(result.net_salary, rupees(30_200));
    }

    #[test]
    fn test_uniform_prorates_flat_lines() {
        let attendance = Attendance::new(30, 15).unwrap();
        let result =
            compute_payroll(&sample_components(), &sample_deductions(), attendance).unwrap();

        // PF 2400 + ESI 240 + PT 200 + IT 1500 + loan 3000 = 7340, halved
        assert_eq!(result.full_deductions, rupees(7_340));
        assert_eq!(result.total_deductions, rupees(3_670));
        assert_eq!(result.net_salary, rupees(12_330));
    }

    #[test]
    fn test_pay_linked_only_keeps_flat_lines() {
        let attendance = Attendance::new(30, 15).unwrap();
        let policy = PayrollPolicy {
            deduction_proration: DeductionProration::PayLinkedOnly,
        };
        let result = compute_payroll_with_policy(
            &sample_components(),
            &sample_deductions(),
            attendance,
            &policy,
        )
        .unwrap();

        // (2400 + 240 + 1500) / 2 + 200 + 3000
        assert_eq!(result.total_deductions, rupees(5_270));
        assert_eq!(result.net_salary, rupees(10_730));

        let shown: Money = result.deductions.iter().map(|line| line.amount).sum();
        assert_eq!(shown, result.total_deductions);
    }

    #[test]
    fn test_policies_agree_on_full_attendance() {
        let attendance = Attendance::full(30).unwrap();
        let uniform =
            compute_payroll(&sample_components(), &sample_deductions(), attendance).unwrap();
        let pay_linked = compute_payroll_with_policy(
            &sample_components(),
            &sample_deductions(),
            attendance,
            &PayrollPolicy {
                deduction_proration: DeductionProration::PayLinkedOnly,
            },
        )
        .unwrap();

        assert_eq!(uniform.net_salary, pay_linked.net_salary);
    }

    #[test]
    fn test_earning_lines_sum_to_gross() {
        let attendance = Attendance::new(26, 20).unwrap();
        let result =
            compute_payroll(&sample_components(), &sample_deductions(), attendance).unwrap();

        let sum: Money = result.earnings.iter().map(|line| line.amount).sum();
        let diff = (sum - result.gross_salary).abs().decimal();
        assert!(diff <= result.gross_salary.decimal() * dec!(0.000000001));
    }

    #[test]
    fn test_breakdown_visibility() {
        let result = compute_payroll(
            &sample_components(),
            &sample_deductions(),
            Attendance::full(30).unwrap(),
        )
        .unwrap();

        let earnings: Vec<&str> = result.earnings.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            earnings,
            vec![
                "Basic Salary",
                "HRA",
                "Conveyance Allowance",
                "Medical Allowance",
                "Other Allowances"
            ]
        );

        let flat: Vec<bool> = result.deductions.iter().map(|l| l.prorated).collect();
        assert_eq!(flat, vec![true, true, false, true, false]);
    }

    #[test]
    fn test_basic_salary_row_always_shown() {
        let result = compute_payroll(
            &PayrollComponents::default(),
            &DeductionPolicy::default(),
            Attendance::full(30).unwrap(),
        )
        .unwrap();

        assert_eq!(result.earnings.len(), 1);
        assert!(result.deductions.is_empty());
        assert_eq!(result.net_salary, Money::zero());
    }

    #[test]
    fn test_zero_attendance() {
        let result = compute_payroll(
            &sample_components(),
            &sample_deductions(),
            Attendance::new(30, 0).unwrap(),
        )
        .unwrap();

        assert_eq!(result.gross_salary, Money::zero());
        assert_eq!(result.total_deductions, Money::zero());
    }

    #[test]
    fn test_rejects_negative_amounts() {
        let mut components = sample_components();
        components.medical_allowance = rupees(-1);
        let err = compute_payroll(
            &components,
            &sample_deductions(),
            Attendance::full(30).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { ref field })
                if field == "Medical Allowance"
        ));

        let mut deductions = sample_deductions();
        deductions.loan_deduction = rupees(-50);
        assert!(compute_payroll(
            &sample_components(),
            &deductions,
            Attendance::full(30).unwrap()
        )
        .is_err());
    }

    #[test]
    fn test_rejects_amounts_beyond_ceiling() {
        let mut components = sample_components();
        components.basic_salary = Money::from_decimal(rust_decimal::Decimal::MAX);
        components.housing_allowance = Money::from_decimal(rust_decimal::Decimal::MAX);
        let err = compute_payroll(
            &components,
            &sample_deductions(),
            Attendance::full(30).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { ref field, max: MAX_AMOUNT, .. })
                if field == "Basic Salary"
        ));

        let mut components = sample_components();
        components.basic_salary = rupees(MAX_AMOUNT);
        components.housing_allowance = rupees(MAX_AMOUNT);
        let result = compute_payroll(
            &components,
            &sample_deductions(),
            Attendance::new(30, 15).unwrap(),
        )
        .unwrap();
        assert!(result.gross_salary > rupees(MAX_AMOUNT));
    }

    #[test]
    fn test_formatted_payroll() {
        let result = compute_payroll(
            &sample_components(),
            &sample_deductions(),
            Attendance::full(30).unwrap(),
        )
        .unwrap();
        let formatted = FormattedPayroll::from_result(&result).unwrap();

        assert_eq!(formatted.gross_salary, "₹32,000.00");
        assert_eq!(formatted.total_deductions, "₹7,340.00");
        assert_eq!(formatted.net_salary, "₹24,660.00");
        assert_eq!(
            formatted.net_in_words,
            "Twenty Four Thousand Six Hundred Sixty Rupees Only"
        );
        assert_eq!(formatted.earnings[1].label, "HRA");
        assert_eq!(formatted.earnings[1].amount, "₹8,000.00");
    }

    #[test]
    fn test_formatted_payroll_rejects_negative_net() {
        let deductions = DeductionPolicy {
            loan_deduction: rupees(50_000),
            ..Default::default()
        };
        let result = compute_payroll(
            &sample_components(),
            &deductions,
            Attendance::full(30).unwrap(),
        )
        .unwrap();

        assert!(result.net_salary.is_negative());
        assert!(FormattedPayroll::from_result(&result).is_err());
    }
}
