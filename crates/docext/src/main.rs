//! docext CLI - documentation directive extensions.
//!
//! Provides commands for:
//! - `render`: Render a markdown page to HTML with directives expanded
//! - `edit-link`: Print the "Edit on GitHub" URL for a page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{EditLinkArgs, RenderArgs};
use output::Output;

/// docext - documentation directive extensions.
#[derive(Parser)]
#[command(name = "docext", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown page to HTML.
    Render(RenderArgs),
    /// Print the edit URL for a page.
    EditLink(EditLinkArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::EditLink(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}
