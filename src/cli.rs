use std::path::PathBuf;

use clap::{command, Parser, Subcommand};

// ///////////// //
// CLI interface //
// ///////////// //

/// receipt-station - Picks a network printer from the print service's directory and submits a generated receipt document for printing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists the printers known to the print service, with their status.
    Printers,
    /// Fetches the printer directory and prints the receipt (the default).
    Print {
        /// Printer to use instead of the directory's first entry.
        #[arg(long)]
        printer: Option<String>,
    },
    /// Writes the composed receipt document to a file.
    Dump {
        /// Output path for the PDF.
        #[arg(long, default_value = "receipt.pdf")]
        output: PathBuf,
    },
}
