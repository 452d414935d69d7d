//! pdfoid CLI - render HTML documents to PDF via a pdfoid service.
//!
//! Provides commands for:
//! - `render`: Render an HTML file to PDF
//! - `status`: Show renderer configuration and availability

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, StatusArgs};
use output::Output;

/// pdfoid - HTML-to-PDF rendering client.
#[derive(Parser)]
#[command(name = "pdfoid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an HTML file to PDF.
    Render(RenderArgs),
    /// Show renderer configuration and availability.
    Status(StatusArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for render command
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Status(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
