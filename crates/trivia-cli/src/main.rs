//! trivia CLI — serve and manage the trivia question bank.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "trivia", version, about = "Trivia question bank API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Listen address, overrides the config file
        #[arg(long)]
        bind: Option<String>,

        /// Seed default data into an empty store before serving
        #[arg(long)]
        seed: bool,
    },

    /// Insert the default categories and starter questions
    Seed {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List categories with their question counts
    Categories {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trivia=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config, bind, seed } => {
            commands::serve::execute(config, bind, seed).await
        }
        Commands::Seed { config } => commands::seed::execute(config).await,
        Commands::Categories { config } => commands::categories::execute(config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
