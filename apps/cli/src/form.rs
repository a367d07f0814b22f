//! # Form Mapping
//!
//! Turns raw form payloads into engine records.
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────┐     ┌────────────────────┐
//! │ CommercialForm       │     │ parse_amount (blank  │     │ CommercialDocument │
//! │ SalarySlipForm       │────►│ = 0), parse_days,    │────►│ SalarySlip         │
//! │ ReceiptForm          │     │ required fields,     │     │ Receipt            │
//! │ (every field a       │     │ defaults             │     │ (figures computed) │
//! │  raw string)         │     │                      │     │                    │
//! └──────────────────────┘     └──────────────────────┘     └────────────────────┘
//! ```
//!
//! Field names follow the browser forms (`invoiceNumber`, `dueDate`,
//! `enablePF`, ...). Values may be JSON strings, numbers or booleans; all of
//! them are read as text and parsed the same way a typed-in value would be.

use chrono::NaiveDate;
use docforge_core::currency::Currency;
use docforge_core::validation::{
    parse_amount, parse_days, validate_amount, validate_positive, validate_pricing_input,
    validate_required,
};
use docforge_core::variant::{DocumentKind, DocumentVariant, TaxLabel};
use docforge_core::{
    Attendance, DeductionPolicy, DiscountMode, LineItem, Money, PayrollComponents, PricingInput,
    Rate, DEFAULT_WORKING_DAYS,
};
use docforge_export::commercial::{CommercialDocument, Party};
use docforge_export::dates::parse_optional_date;
use docforge_export::numbering::generate_number;
use docforge_export::receipt::{PaymentMethod, Receipt};
use docforge_export::salary_slip::{Company, Employee, PayPeriod, SalarySlip};
use serde::Deserialize;

use crate::config::HostConfig;
use crate::error::{FormError, FormResult};

// =============================================================================
// Raw Values
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

/// One form value, as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawValue")]
pub struct Field(String);

impl From<RawValue> for Field {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Text(text) => Field(text),
            RawValue::Number(number) => Field(number.to_string()),
            RawValue::Flag(flag) => Field(flag.to_string()),
        }
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Field(text.to_string())
    }
}

fn raw(field: &Option<Field>) -> Option<&str> {
    field.as_ref().map(|f| f.0.as_str())
}

fn text(field: &Option<Field>) -> String {
    raw(field).map(str::trim).unwrap_or_default().to_string()
}

fn optional_text(field: &Option<Field>) -> Option<String> {
    raw(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required_text(name: &str, field: &Option<Field>) -> FormResult<String> {
    let value = text(field);
    validate_required(name, &value)?;
    Ok(value)
}

fn money(name: &str, field: &Option<Field>) -> FormResult<Money> {
    let amount = Money::from_decimal(parse_amount(name, raw(field))?);
    validate_amount(name, amount)?;
    Ok(amount)
}

/// A manual amount that stays `None` when left blank.
fn optional_money(name: &str, field: &Option<Field>) -> FormResult<Option<Money>> {
    match optional_text(field) {
        None => Ok(None),
        Some(_) => money(name, field).map(Some),
    }
}

/// Checkbox values. Blank is unchecked.
fn flag(name: &str, field: &Option<Field>) -> FormResult<bool> {
    match text(field).to_ascii_lowercase().as_str() {
        "" | "false" | "off" | "no" | "0" => Ok(false),
        "true" | "on" | "yes" | "1" => Ok(true),
        other => Err(FormError::UnknownOption {
            field: name.to_string(),
            value: other.to_string(),
        }),
    }
}

fn currency_or(field: &Option<Field>, default: Currency) -> FormResult<Currency> {
    match optional_text(field) {
        None => Ok(default),
        Some(code) => Currency::from_code(&code).ok_or(FormError::UnknownOption {
            field: "currency".to_string(),
            value: code,
        }),
    }
}

fn date_or(name: &str, field: &Option<Field>, default: NaiveDate) -> FormResult<NaiveDate> {
    Ok(parse_optional_date(name, raw(field))?.unwrap_or(default))
}

// =============================================================================
// Invoices and Quotations
// =============================================================================

/// One row of the item table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub description: Option<Field>,
    pub quantity: Option<Field>,
    pub rate: Option<Field>,
}

/// The invoice and quotation form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommercialForm {
    #[serde(alias = "invoiceNumber", alias = "quotationNumber")]
    pub number: Option<Field>,
    #[serde(alias = "invoiceDate", alias = "quotationDate")]
    pub date: Option<Field>,
    /// Due date (invoice) or valid-until date (quotation).
    #[serde(alias = "dueDate", alias = "validUntil")]
    pub deadline: Option<Field>,
    pub currency: Option<Field>,

    pub business_name: Option<Field>,
    pub business_address: Option<Field>,
    pub business_email: Option<Field>,
    pub business_phone: Option<Field>,
    #[serde(alias = "gstNumber")]
    pub business_tax_id: Option<Field>,

    pub client_name: Option<Field>,
    pub client_address: Option<Field>,
    pub client_email: Option<Field>,
    pub client_phone: Option<Field>,
    pub client_tax_id: Option<Field>,

    pub items: Vec<ItemForm>,
    pub tax_type: Option<Field>,
    pub tax_rate: Option<Field>,
    pub discount_type: Option<Field>,
    pub discount_value: Option<Field>,
    pub shipping_cost: Option<Field>,

    pub notes: Option<Field>,
}

impl CommercialForm {
    /// Maps the form to an invoice (`kind` = Invoice) or quotation.
    ///
    /// Both parties need a name and an address; the business also needs an
    /// email. Blank numbers are generated, blank dates are `today`, a blank
    /// currency is the host default.
    pub fn into_document(
        self,
        kind: DocumentKind,
        config: &HostConfig,
        today: NaiveDate,
    ) -> FormResult<CommercialDocument> {
        let business = Party {
            name: required_text("business name", &self.business_name)?,
            address: required_text("business address", &self.business_address)?,
            email: Some(required_text("business email", &self.business_email)?),
            phone: optional_text(&self.business_phone),
            tax_id: optional_text(&self.business_tax_id),
        };
        let client = Party {
            name: required_text("client name", &self.client_name)?,
            address: required_text("client address", &self.client_address)?,
            email: optional_text(&self.client_email),
            phone: optional_text(&self.client_phone),
            tax_id: optional_text(&self.client_tax_id),
        };

        let currency = currency_or(&self.currency, config.currency)?;

        let mut variant = match kind {
            DocumentKind::Quotation => DocumentVariant::quotation(currency),
            _ => DocumentVariant::invoice(currency),
        }
        .with_pricing(config.pricing);
        if let Some(label) = optional_text(&self.tax_type) {
            variant = variant.with_tax_label(TaxLabel::parse(&label));
        }

        let pricing = self.pricing_input()?;
        validate_pricing_input(&pricing)?;

        let date = date_or("date", &self.date, today)?;
        let deadline = parse_optional_date("deadline", raw(&self.deadline))?;
        let number = optional_text(&self.number).unwrap_or_else(|| generate_number(kind, date));

        Ok(CommercialDocument {
            variant,
            number,
            date,
            deadline,
            business,
            client,
            pricing,
            notes: optional_text(&self.notes),
        })
    }

    fn pricing_input(&self) -> FormResult<PricingInput> {
        let mut line_items = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let description = text(&item.description);
            // Rows without a description are never billed.
            if description.is_empty() {
                continue;
            }
            let row = index + 1;
            let quantity = parse_amount(&format!("quantity of item {}", row), raw(&item.quantity))?;
            let rate = parse_amount(&format!("rate of item {}", row), raw(&item.rate))?;
            line_items.push(LineItem::new(description, quantity, Money::from_decimal(rate)));
        }

        let discount_mode = match text(&self.discount_type).to_ascii_lowercase().as_str() {
            "" | "none" => DiscountMode::None,
            "percentage" | "percent" => DiscountMode::Percentage,
            "fixed" | "amount" => DiscountMode::Fixed,
            other => {
                return Err(FormError::UnknownOption {
                    field: "discount type".to_string(),
                    value: other.to_string(),
                })
            }
        };

        Ok(PricingInput {
            line_items,
            discount_mode,
            discount_value: parse_amount("discount", raw(&self.discount_value))?,
            shipping_cost: Money::from_decimal(parse_amount(
                "shipping cost",
                raw(&self.shipping_cost),
            )?),
            tax_rate: Rate::from_percent(parse_amount("tax rate", raw(&self.tax_rate))?),
        })
    }
}

// =============================================================================
// Salary Slips
// =============================================================================

/// The salary slip form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalarySlipForm {
    pub company_name: Option<Field>,
    pub company_address: Option<Field>,
    pub pf_number: Option<Field>,
    pub esi_number: Option<Field>,

    pub employee_name: Option<Field>,
    pub employee_id: Option<Field>,
    pub designation: Option<Field>,
    pub department: Option<Field>,
    pub date_of_joining: Option<Field>,
    pub pan_number: Option<Field>,
    pub pf_account_number: Option<Field>,
    pub esi_account_number: Option<Field>,

    pub salary_month: Option<Field>,
    pub salary_year: Option<Field>,
    pub working_days: Option<Field>,
    pub present_days: Option<Field>,

    pub basic_salary: Option<Field>,
    pub hra: Option<Field>,
    pub conveyance_allowance: Option<Field>,
    pub medical_allowance: Option<Field>,
    pub special_allowance: Option<Field>,
    pub other_allowances: Option<Field>,

    #[serde(rename = "enablePF")]
    pub enable_pf: Option<Field>,
    #[serde(rename = "enableESI")]
    pub enable_esi: Option<Field>,
    pub pf_deduction: Option<Field>,
    pub esi_deduction: Option<Field>,
    pub professional_tax: Option<Field>,
    pub income_tax: Option<Field>,
    pub loan_deduction: Option<Field>,
    pub other_deductions: Option<Field>,
}

impl SalarySlipForm {
    /// Maps the form and runs payroll under the host's policy.
    ///
    /// Company name and address, employee name, id and designation, and the
    /// salary month and year are required. Blank working days default to 30;
    /// blank present days default to the working days.
    pub fn into_slip(self, config: &HostConfig) -> FormResult<SalarySlip> {
        let company = Company {
            name: required_text("company name", &self.company_name)?,
            address: required_text("company address", &self.company_address)?,
            pf_number: optional_text(&self.pf_number),
            esi_number: optional_text(&self.esi_number),
        };
        let employee = Employee {
            name: required_text("employee name", &self.employee_name)?,
            employee_id: required_text("employee ID", &self.employee_id)?,
            designation: required_text("designation", &self.designation)?,
            department: optional_text(&self.department),
            date_of_joining: parse_optional_date("date of joining", raw(&self.date_of_joining))?,
            pan_number: optional_text(&self.pan_number),
            pf_account_number: optional_text(&self.pf_account_number),
            esi_account_number: optional_text(&self.esi_account_number),
        };
        let period = PayPeriod {
            month: required_text("salary month", &self.salary_month)?,
            year: required_text("salary year", &self.salary_year)?,
        };

        let working_days = parse_days("working days", raw(&self.working_days), DEFAULT_WORKING_DAYS)?;
        let present_days = parse_days("present days", raw(&self.present_days), working_days)?;
        let attendance = Attendance::new(working_days, present_days)?;

        let basic_salary = money("basic salary", &self.basic_salary)?;
        validate_positive("basic salary", basic_salary)?;

        let components = PayrollComponents {
            basic_salary,
            housing_allowance: money("HRA", &self.hra)?,
            conveyance_allowance: money("conveyance allowance", &self.conveyance_allowance)?,
            medical_allowance: money("medical allowance", &self.medical_allowance)?,
            special_allowance: money("special allowance", &self.special_allowance)?,
            other_allowances: money("other allowances", &self.other_allowances)?,
        };
        let deductions = DeductionPolicy {
            provident_fund_enabled: flag("enable PF", &self.enable_pf)?,
            state_insurance_enabled: flag("enable ESI", &self.enable_esi)?,
            manual_provident_fund: optional_money("PF deduction", &self.pf_deduction)?,
            manual_state_insurance: optional_money("ESI deduction", &self.esi_deduction)?,
            professional_tax: money("professional tax", &self.professional_tax)?,
            income_tax: money("income tax", &self.income_tax)?,
            loan_deduction: money("loan deduction", &self.loan_deduction)?,
            other_deductions: money("other deductions", &self.other_deductions)?,
        };

        Ok(SalarySlip::compute(
            company,
            employee,
            period,
            &components,
            &deductions,
            attendance,
            &config.payroll,
        )?)
    }
}

// =============================================================================
// Receipts
// =============================================================================

/// The payment receipt form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptForm {
    #[serde(alias = "receiptNumber")]
    pub number: Option<Field>,
    #[serde(alias = "documentDate", alias = "receiptDate")]
    pub date: Option<Field>,
    pub currency: Option<Field>,
    pub amount: Option<Field>,
    pub payment_method: Option<Field>,

    pub payer_name: Option<Field>,
    pub payer_email: Option<Field>,
    pub recipient_name: Option<Field>,
    pub recipient_address: Option<Field>,

    pub description: Option<Field>,
}

impl ReceiptForm {
    /// Maps the form to a receipt.
    ///
    /// Amount, payment method, payer, recipient and description are
    /// required. A blank number is generated, a blank date is `today` and a
    /// blank currency is the host default.
    pub fn into_receipt(self, config: &HostConfig, today: NaiveDate) -> FormResult<Receipt> {
        required_text("amount", &self.amount)?;
        let amount = money("amount", &self.amount)?;

        let method = required_text("payment method", &self.payment_method)?;
        let payment_method = PaymentMethod::parse(&method).ok_or(FormError::UnknownOption {
            field: "payment method".to_string(),
            value: method,
        })?;

        let payer = Party {
            name: required_text("payer name", &self.payer_name)?,
            email: optional_text(&self.payer_email),
            ..Default::default()
        };
        let recipient = Party {
            name: required_text("recipient name", &self.recipient_name)?,
            address: text(&self.recipient_address),
            ..Default::default()
        };
        let description = required_text("description", &self.description)?;

        let currency = currency_or(&self.currency, config.currency)?;
        let date = date_or("date", &self.date, today)?;
        let number = optional_text(&self.number)
            .unwrap_or_else(|| generate_number(DocumentKind::Receipt, date));

        Ok(Receipt {
            number,
            date,
            currency,
            amount,
            payment_method,
            payer,
            recipient,
            description,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docforge_core::{ValidationError, MAX_AMOUNT};
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn quotation_form() -> CommercialForm {
        serde_json::from_str(
            r#"{
                "quotationNumber": "QUO-1",
                "businessName": "Acme",
                "businessEmail": "sales@acme.test",
                "businessAddress": "1 Road",
                "clientName": "Globex",
                "clientAddress": "2 Street",
                "items": [
                    {"description": "Widget", "quantity": "3", "rate": "10"},
                    {"description": "", "quantity": "junk", "rate": ""}
                ],
                "discountType": "percentage",
                "discountValue": 10,
                "shippingCost": "5",
                "taxRate": "8"
            }"#,
        )
        .unwrap()
    }

    fn required_field(err: FormError) -> String {
        match err {
            FormError::Validation(ValidationError::Required { field }) => field,
            other => panic!("expected a missing field, got {other:?}"),
        }
    }

    #[test]
    fn test_quotation_mapping() {
        let doc = quotation_form()
            .into_document(DocumentKind::Quotation, &HostConfig::default(), today())
            .unwrap();

        assert_eq!(doc.number, "QUO-1");
        assert_eq!(doc.date, today());
        assert_eq!(doc.variant.currency, Currency::Usd);
        assert_eq!(doc.business.email.as_deref(), Some("sales@acme.test"));
        assert_eq!(doc.client.address, "2 Street");
        // the blank row is dropped before it is parsed
        assert_eq!(doc.pricing.line_items.len(), 1);
        assert_eq!(doc.pricing.discount_value, dec!(10));
        assert_eq!(doc.result().total, Money::from_cents(3456));
    }

    #[test]
    fn test_invoice_number_is_generated() {
        let mut form = quotation_form();
        form.number = None;
        form.currency = Some(Field::from("inr"));
        form.tax_type = Some(Field::from("vat"));

        let doc = form
            .into_document(DocumentKind::Invoice, &HostConfig::default(), today())
            .unwrap();
        assert!(doc.number.starts_with("INV-20261019-"));
        assert_eq!(doc.variant.currency, Currency::Inr);
        assert_eq!(doc.variant.tax_label, TaxLabel::Vat);
        // invoices ignore discount and shipping
        assert_eq!(doc.result().total, Money::from_cents(3240));
    }

    #[test]
    fn test_required_fields_are_named() {
        let mut form = quotation_form();
        form.client_name = Some(Field::from("   "));

        let err = form
            .into_document(DocumentKind::Quotation, &HostConfig::default(), today())
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::Validation(ValidationError::Required { ref field }) if field == "client name"
        ));
    }

    #[test]
    fn test_party_contact_fields_are_required() {
        let cases: [(fn(&mut CommercialForm), &str); 3] = [
            (|f: &mut CommercialForm| f.business_email = None, "business email"),
            (
                |f: &mut CommercialForm| f.business_address = Some(Field::from(" ")),
                "business address",
            ),
            (|f: &mut CommercialForm| f.client_address = None, "client address"),
        ];
        for (clear, expected) in cases {
            let mut form = quotation_form();
            clear(&mut form);
            let err = form
                .into_document(DocumentKind::Invoice, &HostConfig::default(), today())
                .unwrap_err();
            assert_eq!(required_field(err), expected);
        }
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let mut form = quotation_form();
        form.items[0].rate = Some(Field::from("12abc"));
        let err = form
            .into_document(DocumentKind::Quotation, &HostConfig::default(), today())
            .unwrap_err();
        assert!(err.to_string().contains("rate of item 1"));

        let mut form = quotation_form();
        form.discount_type = Some(Field::from("bogo"));
        assert!(matches!(
            form.into_document(DocumentKind::Quotation, &HostConfig::default(), today()),
            Err(FormError::UnknownOption { .. })
        ));

        let mut form = quotation_form();
        form.currency = Some(Field::from("XYZ"));
        assert!(matches!(
            form.into_document(DocumentKind::Quotation, &HostConfig::default(), today()),
            Err(FormError::UnknownOption { .. })
        ));

        let mut form = quotation_form();
        form.date = Some(Field::from("19/10/2026"));
        assert!(matches!(
            form.into_document(DocumentKind::Quotation, &HostConfig::default(), today()),
            Err(FormError::Export(_))
        ));
    }

    #[test]
    fn test_huge_figures_are_rejected_before_pricing() {
        let mut form = quotation_form();
        form.items[0].quantity = Some(Field::from("10"));
        form.items[0].rate = Some(Field::from("79228162514264337593543950335"));
        let err = form
            .into_document(DocumentKind::Quotation, &HostConfig::default(), today())
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::Validation(ValidationError::OutOfRange { ref field, .. })
                if field == "rate of item 1"
        ));
        assert!(err.is_user_error());

        // Largest accepted figures still price without overflow.
        let mut form = quotation_form();
        form.items[0].quantity = Some(Field::from("1000000"));
        form.items[0].rate = Some(Field::from(MAX_AMOUNT.to_string().as_str()));
        form.tax_rate = Some(Field::from("10000"));
        let doc = form
            .into_document(DocumentKind::Quotation, &HostConfig::default(), today())
            .unwrap();
        assert!(doc.result().total.is_positive());
    }

    #[test]
    fn test_discount_over_hundred_percent_reaches_pricing() {
        let mut form = quotation_form();
        form.discount_value = Some(Field::from("150"));
        let doc = form
            .into_document(DocumentKind::Quotation, &HostConfig::default(), today())
            .unwrap();
        // 30 - 45 + 5 = -10, plus 8% tax
        assert_eq!(doc.result().total, Money::from_cents(-1080));
    }

    #[test]
    fn test_form_without_items_is_rejected() {
        let mut form = quotation_form();
        form.items.clear();
        assert!(matches!(
            form.into_document(DocumentKind::Quotation, &HostConfig::default(), today()),
            Err(FormError::Validation(ValidationError::Required { .. }))
        ));
    }

    fn salary_form() -> SalarySlipForm {
        serde_json::from_str(
            r#"{
                "companyName": "Initech",
                "companyAddress": "4 Tech Park",
                "employeeName": "Asha Rao",
                "employeeId": "E-102",
                "designation": "Engineer",
                "salaryMonth": "October",
                "salaryYear": 2026,
                "workingDays": "30",
                "presentDays": "15",
                "basicSalary": "20,000",
                "hra": 8000,
                "enablePF": true,
                "professionalTax": "200"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_salary_slip_mapping() {
        let slip = salary_form().into_slip(&HostConfig::default()).unwrap();

        assert_eq!(slip.company.address, "4 Tech Park");
        assert_eq!(slip.employee.designation, "Engineer");
        assert_eq!(slip.period.month, "October");
        assert_eq!(slip.period.year, "2026");
        assert_eq!(slip.attendance.present_days(), 15);
        assert_eq!(slip.result.gross_salary, Money::from_major_minor(14_000, 0));
        // (2,400 + 200) × 0.5
        assert_eq!(slip.result.total_deductions, Money::from_major_minor(1_300, 0));
    }

    #[test]
    fn test_present_days_default_to_working_days() {
        let mut form = salary_form();
        form.working_days = Some(Field::from("26"));
        form.present_days = None;

        let slip = form.into_slip(&HostConfig::default()).unwrap();
        assert_eq!(slip.attendance.working_days(), 26);
        assert_eq!(slip.attendance.present_days(), 26);
    }

    #[test]
    fn test_salary_slip_required_fields() {
        let cases: [(fn(&mut SalarySlipForm), &str); 6] = [
            (|f: &mut SalarySlipForm| f.employee_name = None, "employee name"),
            (|f: &mut SalarySlipForm| f.company_address = None, "company address"),
            (
                |f: &mut SalarySlipForm| f.employee_id = Some(Field::from("")),
                "employee ID",
            ),
            (|f: &mut SalarySlipForm| f.designation = None, "designation"),
            (|f: &mut SalarySlipForm| f.salary_month = None, "salary month"),
            (
                |f: &mut SalarySlipForm| f.salary_year = Some(Field::from("  ")),
                "salary year",
            ),
        ];
        for (clear, expected) in cases {
            let mut form = salary_form();
            clear(&mut form);
            let err = form.into_slip(&HostConfig::default()).unwrap_err();
            assert_eq!(required_field(err), expected);
        }

        let bare: SalarySlipForm =
            serde_json::from_str(r#"{"companyName": "C", "employeeName": "E"}"#).unwrap();
        assert!(bare.into_slip(&HostConfig::default()).is_err());
    }

    #[test]
    fn test_basic_salary_must_be_positive() {
        for basic in [None, Some("0"), Some("")] {
            let mut form = salary_form();
            form.basic_salary = basic.map(Field::from);
            assert!(matches!(
                form.into_slip(&HostConfig::default()),
                Err(FormError::Validation(ValidationError::MustBePositive { ref field }))
                    if field == "basic salary"
            ));
        }
    }

    #[test]
    fn test_huge_salary_is_rejected() {
        let mut form = salary_form();
        form.basic_salary = Some(Field::from("79228162514264337593543950335"));
        form.hra = Some(Field::from("79228162514264337593543950335"));
        assert!(matches!(
            form.into_slip(&HostConfig::default()),
            Err(FormError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_salary_slip_errors() {
        let mut form = salary_form();
        form.present_days = Some(Field::from("31"));
        let err = form.into_slip(&HostConfig::default()).unwrap_err();
        assert!(matches!(err, FormError::Core(_)));
        assert!(err.is_user_error());

        let mut form = salary_form();
        form.hra = Some(Field::from("-5"));
        assert!(matches!(
            form.into_slip(&HostConfig::default()),
            Err(FormError::Validation(ValidationError::MustBeNonNegative { .. }))
        ));

        let mut form = salary_form();
        form.enable_esi = Some(Field::from("maybe"));
        assert!(matches!(
            form.into_slip(&HostConfig::default()),
            Err(FormError::UnknownOption { .. })
        ));
    }

    fn receipt_form() -> ReceiptForm {
        serde_json::from_str(
            r#"{
                "receiptNumber": "REC-001",
                "documentDate": "2026-10-18",
                "currency": "GBP",
                "amount": "250",
                "paymentMethod": "Bank Transfer",
                "payerName": "Globex",
                "payerEmail": "ap@globex.test",
                "recipientName": "Acme",
                "recipientAddress": "1 Road",
                "description": "Invoice INV-7"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_receipt_mapping() {
        let receipt = receipt_form()
            .into_receipt(&HostConfig::default(), today())
            .unwrap();

        assert_eq!(receipt.number, "REC-001");
        assert_eq!(receipt.date, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(receipt.currency, Currency::Gbp);
        assert_eq!(receipt.amount, Money::from_major_minor(250, 0));
        assert_eq!(receipt.payment_method, PaymentMethod::BankTransfer);
        assert_eq!(receipt.payer.email.as_deref(), Some("ap@globex.test"));
        assert_eq!(receipt.recipient.address, "1 Road");
    }

    #[test]
    fn test_receipt_defaults() {
        let mut form = receipt_form();
        form.number = None;
        form.date = None;
        form.currency = None;

        let receipt = form.into_receipt(&HostConfig::default(), today()).unwrap();
        assert!(receipt.number.starts_with("REC-20261019-"));
        assert_eq!(receipt.date, today());
        assert_eq!(receipt.currency, Currency::Usd);
    }

    #[test]
    fn test_receipt_errors() {
        let mut form = receipt_form();
        form.amount = None;
        let err = form.into_receipt(&HostConfig::default(), today()).unwrap_err();
        assert_eq!(required_field(err), "amount");

        let mut form = receipt_form();
        form.payment_method = Some(Field::from("barter"));
        assert!(matches!(
            form.into_receipt(&HostConfig::default(), today()),
            Err(FormError::UnknownOption { ref field, .. }) if field == "payment method"
        ));

        let mut form = receipt_form();
        form.description = None;
        let err = form.into_receipt(&HostConfig::default(), today()).unwrap_err();
        assert_eq!(required_field(err), "description");

        let mut form = receipt_form();
        form.amount = Some(Field::from("-1"));
        assert!(matches!(
            form.into_receipt(&HostConfig::default(), today()),
            Err(FormError::Validation(ValidationError::MustBeNonNegative { .. }))
        ));
    }
}
