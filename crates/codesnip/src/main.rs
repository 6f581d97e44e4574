//! codesnip CLI - annotated code snippet renderer.
//!
//! Provides commands for:
//! - `render`: Render a snippet tag invocation to HTML
//! - `link`: Parse the line range of a hosted source link
//! - `assets`: Write the client-side script and stylesheet

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AssetsArgs, LinkArgs, RenderArgs};
use output::Output;

/// codesnip - annotated code snippet renderer.
#[derive(Parser)]
#[command(name = "codesnip", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tag invocation to HTML.
    Render(RenderArgs),
    /// Parse a hosted source link with a line range fragment.
    Link(LinkArgs),
    /// Write client-side assets to a directory.
    Assets(AssetsArgs),
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
        Commands::Render(args) => args.execute(&output),
        Commands::Link(args) => args.execute(&output),
        Commands::Assets(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
