//! `sigilc` — a thin CLI convenience surface over the sigil algebra kernel.
//!
//! Not part of the kernel's API contract; this binary only renders what
//! `sigil_algebra::api` already computes.

use clap::{Parser, Subcommand};
use colored::*;
use sigil_algebra::api;
use sigil_algebra::format::{format_byte, format_bytes};

#[derive(Parser)]
#[command(name = "sigilc")]
#[command(about = "Atlas Sigil Algebra kernel CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and evaluate a sigil phrase, printing both backends.
    Eval {
        /// Sigil source, e.g. "mark@c21"
        source: String,
    },

    /// Print classInfo for a single byte.
    Classify {
        /// Byte value in [0..255]
        byte: u16,
    },

    /// Run the bridge's exhaustive commutative-diagram validator.
    Validate,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { source } => run_eval(&source),
        Commands::Classify { byte } => run_classify(byte),
        Commands::Validate => run_validate(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_eval(source: &str) -> Result<(), String> {
    let result = api::evaluate(source).map_err(|e| e.to_string())?;

    println!("{}", "literal".cyan().bold());
    println!(
        "  bytes: {}",
        format_bytes(&result.literal.bytes).green()
    );
    if let Some(addresses) = &result.literal.addresses {
        println!("  addresses: {:?}", addresses);
    }

    println!("{}", "operational".cyan().bold());
    println!("  words: {}", result.operational.words.join(" . ").yellow());

    Ok(())
}

fn run_classify(byte: u16) -> Result<(), String> {
    if byte > 255 {
        return Err(format!("byte {} out of range [0..255]", byte));
    }
    let info = api::class_info(byte as u8).map_err(|e| e.to_string())?;
    println!("{}", format!("class {}", info.class_index).cyan().bold());
    println!("  components: h2={} d={} l={}", info.h2, info.d, info.l);
    println!("  canonical byte: {}", format_byte(info.canonical_byte));
    Ok(())
}

fn run_validate() -> Result<(), String> {
    let summary = api::validate();
    println!(
        "commutative diagrams: {}/{} passed",
        summary.passed, summary.total
    );
    if summary.all_passed() {
        println!("{}", "PASS".truecolor(0, 255, 0).bold());
        Ok(())
    } else {
        for entry in &summary.failed {
            println!(
                "  {} class {} expected {:?} got {:?}{}",
                entry.transform_label,
                entry.class_index,
                entry.expected,
                entry.actual,
                entry
                    .error
                    .as_ref()
                    .map(|e| format!(" ({})", e))
                    .unwrap_or_default(),
            );
        }
        println!("{}", "FAIL".truecolor(255, 0, 0).bold());
        Err(format!("{} of {} checks failed", summary.failed.len(), summary.total))
    }
}
