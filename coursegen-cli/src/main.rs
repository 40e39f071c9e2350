//! # coursegen CLI
//!
//! Command-line interface for the coursegen course builder.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "coursegen.yml", env = "COURSEGEN_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a sample course
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Build the course document
    Build {
        /// Course content directory (overrides paths.content)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Output directory (overrides paths.output)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },

    /// Print the learning object tree without writing output
    Outline {
        /// Course content directory (overrides paths.content)
        #[arg(long)]
        content: Option<PathBuf>,

        /// Emit a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_course(path.as_deref()),
        Commands::Build {
            content,
            output,
            pretty,
        } => {
            let opts = commands::BuildOptions {
                content,
                output,
                pretty,
            };
            commands::build_course(&cli.config, opts)
        }
        Commands::Outline { content, json } => {
            commands::show_outline(&cli.config, content.as_deref(), json)
        }
    }
}
