//! Stylebook CLI - compiles component style guides into documentation trees.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "stylebook")]
#[command(about = "Component style guide compiler")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to styleguide.toml config file
    #[arg(short, long, default_value = "styleguide.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the documentation tree
    Compile {
        /// Write the tree to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Load examples, modules and props in place of their handles
        #[arg(long)]
        resolve: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so the tree can be piped from stdout
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compile { output, resolve } => {
            commands::compile::run(&cli.config, output, resolve)?;
        }
    }

    Ok(())
}
