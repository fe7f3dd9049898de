use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use knit::config::Config;

/// Knit: semantic cohesion scoring for concept-feature taxonomies.
///
/// Measures how tightly the concepts annotated with each taxonomy feature
/// cluster in a pretrained embedding space, and compares cohesion across
/// category label groups.
#[derive(Parser)]
#[command(name = "knit", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full cohesion analysis and print the report
    Analyze {
        /// Rescan the raw corpus even if the embedding cache exists
        #[arg(long)]
        refresh_cache: bool,
    },

    /// Show configured paths, cache state, and taxonomy shape
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("knit=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { refresh_cache } => {
            let config = Config::load()?;
            config.require_feature_table()?;
            config.require_embeddings()?;

            let (loaded, scored) = knit::pipeline::run(&config, refresh_cache)?;

            println!("{}", "Analysis complete.".bold());
            println!("  Features loaded: {loaded}");
            println!("  Features scored: {scored}");
            if scored < loaded {
                println!(
                    "  {}",
                    format!(
                        "{} features fell outside the [4, 7] embeddable-concept window",
                        loaded - scored
                    )
                    .dimmed()
                );
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            knit::status::show(&config)?;
        }
    }

    Ok(())
}
