//! gencache - Generated Project Cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use gencache::cli::{commands, Cli, Commands};
use gencache::error::GencacheResult;
use gencache::generated::CacheStore;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GencacheResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("gencache=warn"),
        1 => EnvFilter::new("gencache=info"),
        _ => EnvFilter::new("gencache=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut store = match cli.file {
        Some(path) => CacheStore::with_path(path),
        None => CacheStore::default(),
    }
    .with_override_profile(cli.profile);
    debug!("Using generated cache at {}", store.path().display());

    match cli.command {
        Commands::Path => commands::path(&store),
        Commands::Show(args) => commands::show(args, &mut store).await,
        Commands::Profile(args) => commands::profile(args, &mut store).await,
        Commands::Image(args) => commands::image(args, &mut store).await,
        Commands::Deployment(args) => commands::deployment(args, &mut store).await,
        Commands::Var(args) => commands::var(args, &mut store).await,
        Commands::Dependency(args) => commands::dependency(args, &mut store).await,
        Commands::Context(args) => commands::context(args, &mut store).await,
        Commands::Hash(args) => commands::hash(args),
    }
}
