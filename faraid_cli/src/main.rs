//! # Faraid CLI Application
//!
//! Console front end for the inheritance share calculator. Plays the role
//! the original web form played: collect three raw fields, coerce them,
//! invoke the core, and render either the error message or the result pair.
//!
//! Fields missing from the command line are collected interactively, so
//! `faraid_cli` with no arguments behaves like the form, and
//! `faraid_cli 900000 2 1 --json` behaves like an API.

mod form;
mod format;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chrono::{Datelike, Utc};
use clap::Parser;
use serde::Serialize;

use faraid_core::{calculate, ShareInput, ShareResult};

use crate::format::format_inr;

#[derive(Parser, Debug)]
#[command(
    name = "faraid",
    version,
    about = "Islamic inheritance share calculator (fixed 2:1 son:daughter ratio)"
)]
struct Cli {
    /// Total estate amount to distribute
    #[arg(allow_negative_numbers = true)]
    amount: Option<String>,

    /// Number of sons
    #[arg(allow_negative_numbers = true)]
    sons: Option<String>,

    /// Number of daughters
    #[arg(allow_negative_numbers = true)]
    daughters: Option<String>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,
}

/// Success envelope consumed by scripted callers.
#[derive(Serialize)]
struct SuccessEnvelope<'a> {
    success: bool,
    result: &'a ShareResult,
}

/// Error envelope: the display message, verbatim.
#[derive(Serialize)]
struct ErrorEnvelope {
    error: String,
}

fn prompt_field(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn render_result(input: &ShareInput, result: &ShareResult) {
    println!("═══════════════════════════════════════");
    println!("  INHERITANCE SHARES");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Estate total: {}", format_inr(input.amount));
    println!("  Sons:         {}", input.sons);
    println!("  Daughters:    {}", input.daughters);
    println!();
    println!("Division:");
    println!(
        "  Share units: {:.0} (each son 2, each daughter 1)",
        result.total_share_units
    );
    println!("  Unit value:  {}", format_inr(result.share_unit_value));
    println!();
    println!("Each Son's Share:      {}", format_inr(result.son_share));
    println!(
        "Each Daughter's Share: {}",
        format_inr(result.daughter_share)
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.json {
        println!("Faraid - Islamic Inheritance Calculator");
        println!("=======================================");
        println!();
    }

    let amount = cli
        .amount
        .unwrap_or_else(|| prompt_field("Enter total amount: "));
    let sons = cli
        .sons
        .unwrap_or_else(|| prompt_field("Enter number of sons [0]: "));
    let daughters = cli
        .daughters
        .unwrap_or_else(|| prompt_field("Enter number of daughters [0]: "));

    let input = form::coerce(&amount, &sons, &daughters);

    let code = match calculate(&input) {
        Ok(result) => {
            if cli.json {
                let envelope = SuccessEnvelope {
                    success: true,
                    result: &result,
                };
                if let Ok(json) = serde_json::to_string_pretty(&envelope) {
                    println!("{}", json);
                }
            } else {
                render_result(&input, &result);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if cli.json {
                let envelope = ErrorEnvelope {
                    error: e.to_string(),
                };
                if let Ok(json) = serde_json::to_string_pretty(&envelope) {
                    println!("{}", json);
                }
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    };

    if !cli.json {
        println!();
        println!("Faraid · © {}", Utc::now().year());
    }

    code
}
