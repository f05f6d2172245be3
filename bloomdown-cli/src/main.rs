//! Bloomdown CLI - convert annotated markdown books to Bloom HTML

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "bloomdown")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a markdown book to Bloom HTML
    Convert {
        /// Input markdown file path
        input: String,

        /// Output file path (defaults to the input name with .htm)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a markdown book without converting it
    Validate {
        /// Input markdown file path
        input: String,
    },

    /// Display statistics about a markdown book
    Info {
        /// Input markdown file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence
    let filter = if cli.verbose {
        "bloomdown_cli=debug,bloomdown_core=debug"
    } else {
        "bloomdown_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert { input, output } => commands::convert(&input, output.as_deref()),

        Commands::Validate { input } => commands::validate(&input),

        Commands::Info { input, json } => commands::info(&input, json),
    }
}
