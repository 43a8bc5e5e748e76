use clap::Parser;
use tracing_subscriber::EnvFilter;

mod batch;
mod cli;
mod consensus;
mod core;
mod output;
mod parsing;
mod stats;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("msa_stats=debug,info")
    } else {
        EnvFilter::new("msa_stats=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Compute(args) => {
            cli::compute::run(args)?;
        }
        cli::Commands::Inspect(args) => {
            cli::inspect::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
