//! # Tirilla CLI
//!
//! Command-line interface for the receipt template compiler.
//!
//! ## Usage
//!
//! ```bash
//! # List the recognized tag dictionary
//! tirilla tags
//!
//! # Compile a template with a data record
//! tirilla compile receipt.txt --data data.json
//!
//! # Fixed transaction id for reproducible output
//! tirilla compile receipt.txt --txn-id TXN-DEMO01
//!
//! # Full hex dump instead of the 32-byte preview
//! tirilla compile receipt.txt --hex
//!
//! # Write the raw instruction stream to a file
//! tirilla compile receipt.txt --out stream.bin
//!
//! # Machine-readable result (chunks + diagnostics) as JSON
//! tirilla compile receipt.txt --json
//! ```
//!
//! The exit status is non-zero when the error list is non-empty: blocking
//! diagnostics mean the stream must not be executed.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use tirilla::{
    PrinterProfile, TirillaError,
    stream::{self, hex_string},
    synth::{self, ReceiptData, SynthesisOptions},
    tags,
};

/// Tirilla - receipt template compiler
#[derive(Parser, Debug)]
#[command(name = "tirilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a template file into an instruction stream
    Compile {
        /// Template file (UTF-8 text with {{TAG}} markup)
        template: PathBuf,

        /// Data record JSON file ({"store_id": ..., "items": [...], "total": ...})
        #[arg(long)]
        data: Option<PathBuf>,

        /// Printer profile (mm80 or mm58)
        #[arg(long, default_value = "mm80")]
        profile: String,

        /// Fixed barcode transaction id (random when omitted)
        #[arg(long)]
        txn_id: Option<String>,

        /// Print the full stream as hex instead of the preview
        #[arg(long)]
        hex: bool,

        /// Write the raw instruction stream to a file
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print the full result (chunks + diagnostics) as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recognized tag dictionary
    Tags,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TirillaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            template,
            data,
            profile,
            txn_id,
            hex,
            out,
            json,
        } => {
            let template_text = fs::read_to_string(&template)?;

            let record: ReceiptData = match data {
                Some(path) => serde_json::from_str(&fs::read_to_string(&path)?)
                    .map_err(|e| TirillaError::InvalidCommand(format!("{}: {}", path.display(), e)))?,
                None => ReceiptData::default(),
            };

            let profile = PrinterProfile::by_name(&profile).ok_or_else(|| {
                TirillaError::Profile(format!(
                    "Unknown profile '{}'. Use 'mm80' or 'mm58'",
                    profile
                ))
            })?;

            let options = SynthesisOptions { profile, txn_id };
            let result = synth::synthesize_with_options(&template_text, &record, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&result).expect("result serializes"));
            } else {
                for warning in &result.warnings {
                    println!("warning: {}", warning);
                }
                for error in &result.errors {
                    println!("error: {}", error);
                }

                let summary = result.summary();
                println!(
                    "{} chunks, {} bytes",
                    result.chunks.len(),
                    summary.total_bytes
                );
                if hex {
                    println!("{}", hex_string(&stream::to_bytes(&result.chunks)));
                } else {
                    println!("{}", summary);
                }
            }

            if let Some(path) = out {
                fs::write(&path, stream::to_bytes(&result.chunks))?;
                println!("Wrote {}", path.display());
            }

            if !result.is_valid() {
                return Err(TirillaError::InvalidCommand(format!(
                    "{} blocking diagnostic(s); stream not usable",
                    result.errors.len()
                )));
            }
            Ok(())
        }

        Commands::Tags => {
            println!("Recognized tags:");
            for spec in tags::all() {
                if spec.bytes.is_empty() {
                    println!("  {:<14} {:?}  {}", spec.tag, spec.category, spec.name);
                } else {
                    println!(
                        "  {:<14} {:?}  {}  [{}]",
                        spec.tag, spec.category, spec.name, spec.hex
                    );
                }
            }
            Ok(())
        }
    }
}
