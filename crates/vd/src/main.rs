//! VD CLI - Course site configuration engine.
//!
//! Provides commands for:
//! - `check`: Validate the configuration and its links against the docs tree
//! - `sidebar`: Show the navigation resolved for a page
//! - `outline`: Show the outline of a Markdown file
//! - `export`: Print the normalized site configuration
//! - `audit`: Audit the docs content

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AuditArgs, CheckArgs, ExportArgs, OutlineArgs, SidebarArgs};
use output::Output;

/// VD - Course site configuration engine.
#[derive(Parser)]
#[command(name = "vd", version, about)]
struct Cli {
    /// Enable verbose output (show load and scan logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and check nav and sidebar links.
    Check(CheckArgs),
    /// Show sidebar, active nav item and prev/next links for a page.
    Sidebar(SidebarArgs),
    /// Show the outline of a Markdown file.
    Outline(OutlineArgs),
    /// Print the normalized site configuration.
    Export(ExportArgs),
    /// Audit docs content for missing images, sections and links.
    Audit(AuditArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Outline(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Audit(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
