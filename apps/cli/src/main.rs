//! # docforge CLI Entry Point
//!
//! Parses arguments, loads host configuration and dispatches to
//! [`docforge_cli::commands::run`].

use clap::{Args, Parser, Subcommand};
use docforge_cli::commands::{self, Request};
use docforge_cli::config::HostConfig;
use docforge_core::variant::DocumentKind;
use docforge_export::ExportFormat;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Docforge: invoices, quotations, salary slips and receipts from form files.
#[derive(Parser, Debug)]
#[command(name = "docforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an invoice.
    Invoice(FormArgs),
    /// Render a quotation.
    Quotation(FormArgs),
    /// Render a salary slip.
    SalarySlip(FormArgs),
    /// Render a payment receipt.
    Receipt(FormArgs),
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Form file (JSON).
    #[arg(short, long)]
    input: PathBuf,

    /// preview, print, word or csv.
    #[arg(short, long, default_value = "preview")]
    format: ExportFormat,

    /// Output directory (defaults to DOCFORGE_OUTPUT_DIR).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the artifact body to stdout instead of a file.
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

impl FormArgs {
    fn into_request(self, kind: DocumentKind) -> Request {
        Request {
            kind,
            input: self.input,
            format: self.format,
            output: self.output,
            stdout: self.stdout,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --stdout output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = HostConfig::load()?;
    info!(
        currency = %config.currency,
        clamp_discount = config.pricing.clamp_discount,
        rounding = ?config.pricing.rounding,
        deduction_proration = ?config.payroll.deduction_proration,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let request = match cli.command {
        Commands::Invoice(args) => args.into_request(DocumentKind::Invoice),
        Commands::Quotation(args) => args.into_request(DocumentKind::Quotation),
        Commands::SalarySlip(args) => args.into_request(DocumentKind::SalarySlip),
        Commands::Receipt(args) => args.into_request(DocumentKind::Receipt),
    };

    commands::run(&request, &config)
}
