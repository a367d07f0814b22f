//! End-to-end: form file on disk to artifact on disk.

use docforge_cli::commands::{run, Request};
use docforge_cli::config::HostConfig;
use docforge_core::payroll::DeductionProration;
use docforge_core::variant::DocumentKind;
use docforge_export::ExportFormat;
use std::fs;

const SALARY_FORM: &str = r#"{
    "companyName": "Initech Pvt Ltd",
    "companyAddress": "4 Tech Park\nPune",
    "employeeName": "Asha Rao",
    "employeeId": "E-102",
    "designation": "Engineer",
    "salaryMonth": "October",
    "salaryYear": "2026",
    "workingDays": "30",
    "presentDays": "15",
    "basicSalary": "20000",
    "hra": "8000",
    "enablePF": "on",
    "professionalTax": "200",
    "loanDeduction": "1000"
}"#;

fn render(config: &HostConfig, format: ExportFormat) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("slip.json");
    fs::write(&input, SALARY_FORM).unwrap();

    let request = Request {
        kind: DocumentKind::SalarySlip,
        input,
        format,
        output: Some(dir.path().to_path_buf()),
        stdout: false,
    };
    run(&request, config).unwrap();

    let name = format!("SalarySlip_Asha_Rao_October_2026.{}", format.extension());
    fs::read_to_string(dir.path().join(name)).unwrap()
}

#[test]
fn uniform_proration_scales_every_deduction() {
    let csv = render(&HostConfig::default(), ExportFormat::Csv);
    // (2,400 + 200 + 1,000) × 15/30
    assert!(csv.contains("Total Deductions,1800.00\n"));
    assert!(csv.contains("Net Salary,12200.00\n"));
}

#[test]
fn pay_linked_proration_keeps_flat_deductions_whole() {
    let mut config = HostConfig::default();
    config.payroll.deduction_proration = DeductionProration::PayLinkedOnly;

    let csv = render(&config, ExportFormat::Csv);
    // 1,200 + 200 + 1,000
    assert!(csv.contains("Total Deductions,2400.00\n"));
    assert!(csv.contains("Net Salary,11600.00\n"));
}

#[test]
fn print_page_spells_out_the_net_salary() {
    let html = render(&HostConfig::default(), ExportFormat::Print);
    assert!(html.contains("<title>Salary Slip - Asha Rao</title>"));
    assert!(html.contains("NET SALARY: ₹12,200.00"));
    assert!(html.contains("Twelve Thousand Two Hundred Rupees Only"));
}

#[test]
fn oversized_salary_is_a_form_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("slip.json");
    let form = SALARY_FORM.replace("\"20000\"", "\"79228162514264337593543950335\"");
    fs::write(&input, form).unwrap();

    let request = Request {
        kind: DocumentKind::SalarySlip,
        input,
        format: ExportFormat::Csv,
        output: Some(dir.path().to_path_buf()),
        stdout: false,
    };
    let err = run(&request, &HostConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid form: basic salary must be between"));
}
