//! Command handlers: read a form, build the artifact, write it out.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use docforge_core::variant::DocumentKind;
use docforge_export::{export, Artifact, Document, ExportFormat};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::HostConfig;
use crate::error::FormResult;
use crate::form::{CommercialForm, ReceiptForm, SalarySlipForm};

/// One CLI invocation.
#[derive(Debug, Clone)]
pub struct Request {
    pub kind: DocumentKind,
    pub input: PathBuf,
    pub format: ExportFormat,
    /// Overrides `DOCFORGE_OUTPUT_DIR`.
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

/// Maps a form payload to a document and renders it.
pub fn build_artifact(
    kind: DocumentKind,
    form_json: &str,
    format: ExportFormat,
    config: &HostConfig,
    today: NaiveDate,
) -> FormResult<Artifact> {
    let document: Box<dyn Document> = match kind {
        DocumentKind::SalarySlip => {
            let form: SalarySlipForm = serde_json::from_str(form_json)?;
            let slip = form.into_slip(config)?;
            debug!(
                gross = %slip.result.gross_salary,
                deductions = %slip.result.total_deductions,
                net = %slip.result.net_salary,
                "Payroll computed"
            );
            Box::new(slip)
        }
        DocumentKind::Invoice | DocumentKind::Quotation => {
            let form: CommercialForm = serde_json::from_str(form_json)?;
            let document = form.into_document(kind, config, today)?;
            let result = document.result();
            debug!(
                subtotal = %result.subtotal,
                discount = %result.discount_amount,
                tax = %result.tax_amount,
                total = %result.total,
                "Totals computed"
            );
            Box::new(document)
        }
        DocumentKind::Receipt => {
            let form: ReceiptForm = serde_json::from_str(form_json)?;
            let receipt = form.into_receipt(config, today)?;
            debug!(amount = %receipt.amount, method = %receipt.payment_method, "Receipt mapped");
            Box::new(receipt)
        }
    };

    Ok(export(document.as_ref(), format)?)
}

/// Writes `artifact` into `dir` under its own file name.
pub fn write_artifact(artifact: &Artifact, dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.file_name);
    fs::write(&path, &artifact.body)?;
    Ok(path)
}

/// Runs one request end to end.
pub fn run(request: &Request, config: &HostConfig) -> anyhow::Result<()> {
    let form_json = fs::read_to_string(&request.input)
        .with_context(|| format!("Cannot read form {}", request.input.display()))?;

    let today = Local::now().date_naive();
    let artifact = match build_artifact(request.kind, &form_json, request.format, config, today) {
        Ok(artifact) => artifact,
        Err(e) => {
            if e.is_user_error() {
                warn!(kind = %request.kind, error = %e, "Form rejected");
            }
            return Err(e.into());
        }
    };

    if request.stdout {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(artifact.body.as_bytes())
            .context("Cannot write to stdout")?;
        stdout.flush().context("Cannot write to stdout")?;
        return Ok(());
    }

    let dir = request.output.as_deref().unwrap_or(config.output_dir.as_path());
    let path = write_artifact(&artifact, dir)
        .with_context(|| format!("Cannot write {}", dir.join(&artifact.file_name).display()))?;

    info!(
        path = %path.display(),
        mime_type = %artifact.mime_type,
        bytes = artifact.body.len(),
        "Artifact written"
    );
    Ok(())
}
