//! # Salary Slips
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Company name / address                           │
//! │                        PF No / ESI No                                   │
//! │                        SALARY SLIP  (October 2026)                      │
//! │                                                                         │
//! │  Employee details           Working / present days                      │
//! │                                                                         │
//! │  ┌──────── EARNINGS ────────┐   ┌──────── DEDUCTIONS ───────┐           │
//! │  │ Basic Salary   (× ratio) │   │ PF / ESI / TDS  (× ratio) │           │
//! │  │ HRA ...        (× ratio) │   │ PT / Loan / Other  (flat) │           │
//! │  │ GROSS SALARY             │   │ TOTAL DEDUCTIONS          │           │
//! │  └──────────────────────────┘   └───────────────────────────┘           │
//! │                                                                         │
//! │  NET SALARY: ₹xx,xx,xxx.xx   (amount in words) Rupees Only              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use docforge_core::payroll::{compute_payroll_with_policy, FormattedPayroll, PayrollPolicy};
use docforge_core::variant::DocumentKind;
use docforge_core::{Attendance, CoreResult, DeductionPolicy, PayrollComponents, PayrollResult};
use serde::{Deserialize, Serialize};

use crate::csv::{row, CsvRows};
use crate::dates::{format_date, DateStyle};
use crate::document::Document;
use crate::error::ExportResult;
use crate::html::{escape, escape_multiline, label_row, optional_field};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub address: String,
    /// Employer provident fund registration.
    pub pf_number: Option<String>,
    /// Employer state insurance registration.
    pub esi_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    pub employee_id: String,
    pub designation: String,
    pub department: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub pan_number: Option<String>,
    pub pf_account_number: Option<String>,
    pub esi_account_number: Option<String>,
}

/// The month a slip is issued for, as the form names it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub month: String,
    pub year: String,
}

/// A computed salary slip.
#[derive(Debug, Clone, PartialEq)]
pub struct SalarySlip {
    pub company: Company,
    pub employee: Employee,
    pub period: PayPeriod,
    pub attendance: Attendance,
    pub result: PayrollResult,
}

impl SalarySlip {
    /// Runs the payroll engine and keeps its result for rendering.
    pub fn compute(
        company: Company,
        employee: Employee,
        period: PayPeriod,
        components: &PayrollComponents,
        deductions: &DeductionPolicy,
        attendance: Attendance,
        policy: &PayrollPolicy,
    ) -> CoreResult<Self> {
        let result = compute_payroll_with_policy(components, deductions, attendance, policy)?;
        Ok(SalarySlip {
            company,
            employee,
            period,
            attendance,
            result,
        })
    }

    fn details(&self) -> String {
        let mut out = String::new();
        let e = &self.employee;
        optional_field(&mut out, "Employee Name", Some(e.name.as_str()));
        optional_field(&mut out, "Employee ID", Some(e.employee_id.as_str()));
        optional_field(&mut out, "Designation", Some(e.designation.as_str()));
        optional_field(&mut out, "Department", e.department.as_deref());
        if let Some(joined) = e.date_of_joining {
            optional_field(
                &mut out,
                "Date of Joining",
                Some(format_date(joined, DateStyle::Indian).as_str()),
            );
        }
        optional_field(&mut out, "PAN", e.pan_number.as_deref());
        optional_field(
            &mut out,
            "Working Days",
            Some(self.attendance.working_days().to_string().as_str()),
        );
        optional_field(
            &mut out,
            "Present Days",
            Some(self.attendance.present_days().to_string().as_str()),
        );
        out
    }
}

impl Document for SalarySlip {
    fn kind(&self) -> DocumentKind {
        DocumentKind::SalarySlip
    }

    fn title(&self) -> String {
        format!("Salary Slip - {}", self.employee.name)
    }

    fn file_stem(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            DocumentKind::SalarySlip.file_prefix(),
            self.employee.name,
            self.period.month,
            self.period.year
        )
    }

    fn html_fragment(&self) -> ExportResult<String> {
        let formatted = FormattedPayroll::from_result(&self.result)?;
        let mut out = String::new();

        out.push_str(&format!(
            "<div class=\"document-header\"><h1>{}</h1><p>{}</p>",
            escape(&self.company.name),
            escape_multiline(&self.company.address)
        ));
        optional_field(&mut out, "PF No", self.company.pf_number.as_deref());
        optional_field(&mut out, "ESI No", self.company.esi_number.as_deref());
        out.push_str(&format!(
            "<h2>{}</h2><p>{} {}</p></div>",
            DocumentKind::SalarySlip.title(),
            escape(&self.period.month),
            escape(&self.period.year)
        ));

        out.push_str(&format!(
            "<div class=\"employee\">{}</div>",
            self.details()
        ));

        out.push_str("<div class=\"earnings\"><h3>EARNINGS</h3><table><tbody>");
        for line in &formatted.earnings {
            out.push_str(&label_row(&line.label, &line.amount));
        }
        out.push_str(&format!(
            "<tr class=\"total-row\"><td class=\"label\">GROSS SALARY</td>\
             <td class=\"amount\">{}</td></tr></tbody></table></div>",
            formatted.gross_salary
        ));

        out.push_str("<div class=\"deductions\"><h3>DEDUCTIONS</h3><table><tbody>");
        for line in &formatted.deductions {
            out.push_str(&label_row(&line.label, &line.amount));
        }
        out.push_str(&format!(
            "<tr class=\"total-row\"><td class=\"label\">TOTAL DEDUCTIONS</td>\
             <td class=\"amount\">{}</td></tr></tbody></table></div>",
            formatted.total_deductions
        ));

        out.push_str(&format!(
            "<div class=\"net-salary\"><h2>NET SALARY: {}</h2>\
             <p>Amount in Words: {}</p></div>",
            formatted.net_salary, formatted.net_in_words
        ));

        let mut accounts = String::new();
        optional_field(
            &mut accounts,
            "PF Account Number",
            self.employee.pf_account_number.as_deref(),
        );
        optional_field(
            &mut accounts,
            "ESI Account Number",
            self.employee.esi_account_number.as_deref(),
        );
        if !accounts.is_empty() {
            out.push_str(&format!(
                "<div class=\"account-details\"><h4>Account Details:</h4>{}</div>",
                accounts
            ));
        }

        out.push_str(
            "<div class=\"footer\"><p>This is a computer-generated salary slip \
             and does not require a signature.</p></div>",
        );
        Ok(out)
    }

    fn csv_rows(&self) -> ExportResult<CsvRows> {
        let result = &self.result;

        let mut rows = vec![
            row(["Company Name", self.company.name.as_str()]),
            row(["Employee Name", self.employee.name.as_str()]),
            row(["Employee ID", self.employee.employee_id.as_str()]),
            row(["Designation", self.employee.designation.as_str()]),
            row([
                "Salary Month".to_string(),
                format!("{} {}", self.period.month, self.period.year),
            ]),
            row([
                "Working Days".to_string(),
                self.attendance.working_days().to_string(),
            ]),
            row([
                "Present Days".to_string(),
                self.attendance.present_days().to_string(),
            ]),
            Vec::new(),
            row(["EARNINGS"]),
        ];

        for line in &result.earnings {
            rows.push(row([line.label.clone(), line.amount.to_string()]));
        }
        rows.push(row([
            "Gross Salary".to_string(),
            result.gross_salary.to_string(),
        ]));
        rows.push(Vec::new());

        rows.push(row(["DEDUCTIONS"]));
        for line in &result.deductions {
            rows.push(row([line.label.clone(), line.amount.to_string()]));
        }
        rows.push(row([
            "Total Deductions".to_string(),
            result.total_deductions.to_string(),
        ]));
        rows.push(Vec::new());

        rows.push(row([
            "Net Salary".to_string(),
            result.net_salary.to_string(),
        ]));

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
