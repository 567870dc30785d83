//! Brazilian document CLI.
//!
//! This binary exposes the brdocs library on the command line: masking,
//! unformatting, validating values and scanning text files for CPF/CNPJ
//! numbers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use brdocs::domain::normalize_phone;
use brdocs::{
    apply_mask, check_cnpj, check_cpf, check_document, quote, scan, unformat, Finding, MaskKind,
};

/// Brazilian document tool
///
/// Mask, unformat and validate CPF, CNPJ and phone numbers.
#[derive(Parser)]
#[command(name = "brdocs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a mask pattern to a value
    Mask {
        /// Pattern id: cpf, cnpj, cpf-cnpj-auto, phone-fixed, phone-mobile, phone
        pattern: String,

        /// Raw or partially formatted value
        value: String,
    },

    /// Strip every non-digit character
    Unformat {
        value: String,
    },

    /// Validate one or more values (exits with failure if any is invalid)
    Validate {
        /// Document type to check against
        #[arg(short, long, value_enum, default_value_t = DocumentArg::Auto)]
        kind: DocumentArg,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Find CPF/CNPJ numbers in a text file
    Scan {
        /// Input text file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sum quote items from a JSON file
    Total {
        /// JSON array of {quantity, unit_price, discount} items
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DocumentArg {
    /// CPF or CNPJ by digit count
    Auto,
    Cpf,
    Cnpj,
    Phone,
}

/// Outcome of validating one value.
#[derive(Debug, Serialize)]
struct ValidationReport {
    input: String,
    valid: bool,
    /// Masked form when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ValidationReport {
    fn line(&self) -> String {
        match (&self.formatted, &self.reason) {
            (Some(formatted), _) => format!("{}: valid ({})", self.input, formatted),
            (None, Some(reason)) => format!("{}: invalid ({})", self.input, reason),
            (None, None) => format!("{}: invalid", self.input),
        }
    }
}

/// Validates a single value against the requested document type.
fn validate_value(value: &str, kind: DocumentArg) -> ValidationReport {
    let checked = match kind {
        DocumentArg::Auto => check_document(value),
        DocumentArg::Cpf => check_cpf(value),
        DocumentArg::Cnpj => check_cnpj(value),
        DocumentArg::Phone => {
            let phone = normalize_phone(value);
            return ValidationReport {
                input: value.to_string(),
                valid: phone.is_some(),
                reason: phone.is_none().then(|| "incomplete phone".to_string()),
                formatted: phone.map(|(_, display)| format!("phone {}", display)),
            };
        }
    };

    match checked {
        Ok(doc) => ValidationReport {
            input: value.to_string(),
            valid: true,
            formatted: Some(doc.to_string()),
            reason: None,
        },
        Err(rejection) => ValidationReport {
            input: value.to_string(),
            valid: false,
            formatted: None,
            reason: Some(rejection.to_string()),
        },
    }
}

/// Command handler.
struct DocumentHandler {
    verbose: bool,
}

impl DocumentHandler {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn mask(&self, pattern: &str, value: &str) -> Result<()> {
        let kind: MaskKind = pattern
            .parse()
            .with_context(|| format!("Cannot mask with '{}'", pattern))?;
        println!("{}", apply_mask(value, kind));
        Ok(())
    }

    fn unformat(&self, value: &str) -> Result<()> {
        println!("{}", unformat(value));
        Ok(())
    }

    fn validate(&self, values: &[String], kind: DocumentArg, json: bool) -> Result<()> {
        let reports: Vec<ValidationReport> =
            values.iter().map(|v| validate_value(v, kind)).collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                println!("{}", report.line());
            }
        }

        let invalid = reports.iter().filter(|r| !r.valid).count();
        tracing::debug!(total = reports.len(), invalid, "validation finished");
        if invalid > 0 {
            anyhow::bail!("{} of {} value(s) invalid", invalid, reports.len());
        }
        Ok(())
    }

    fn scan(&self, input: &Path, json: bool) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        let findings = scan(&text);

        if json {
            println!("{}", serde_json::to_string_pretty(&findings)?);
            return Ok(());
        }

        for finding in &findings {
            println!("{}", describe(finding));
        }

        if self.verbose {
            println!("\nScan Summary:");
            println!("  Candidates: {}", findings.len());
            println!(
                "  Valid:      {}",
                findings.iter().filter(|f| f.is_valid()).count()
            );
        }

        if findings.is_empty() {
            println!("⚠ No CPF/CNPJ found in {}", input.display());
        }

        Ok(())
    }

    fn total(&self, input: &Path) -> Result<()> {
        let items = quote::load_items(input)
            .with_context(|| format!("Failed to load quote items from {}", input.display()))?;

        if self.verbose {
            for (index, item) in items.iter().enumerate() {
                println!("  #{:<3} {:>12.2}", index + 1, item.total());
            }
        }
        println!("{:.2}", quote::quote_total(&items));
        Ok(())
    }
}

fn describe(finding: &Finding) -> String {
    let status = match finding.rejection {
        None => "valid".to_string(),
        Some(rejection) => format!("invalid ({})", rejection),
    };
    format!(
        "{}..{}\t{}\t{}\t{}",
        finding.span.start, finding.span.end, finding.kind, finding.matched, status
    )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let handler = DocumentHandler::new(cli.verbose);

    match &cli.command {
        Commands::Mask { pattern, value } => handler.mask(pattern, value)?,
        Commands::Unformat { value } => handler.unformat(value)?,
        Commands::Validate { kind, json, values } => handler.validate(values, *kind, *json)?,
        Commands::Scan { input, json } => handler.scan(input, *json)?,
        Commands::Total { input } => handler.total(input)?,
    }

    Ok(())
}
