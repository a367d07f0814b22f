//! # docforge-cli: Form Host
//!
//! The command-line counterpart of the browser form: one form file in, one
//! export artifact out.
//!
//! ```text
//! docforge invoice     --input form.json --format print
//! docforge quotation   --input form.json --format word --output out/
//! docforge salary-slip --input form.json --format csv  --stdout
//! docforge receipt     --input form.json --format preview
//! ```
//!
//! ## Modules
//!
//! - [`config`] - `DOCFORGE_*` environment configuration
//! - [`form`] - Raw form payloads and their mapping to documents
//! - [`commands`] - Build and write artifacts
//! - [`error`] - Form errors

pub mod commands;
pub mod config;
pub mod error;
pub mod form;
