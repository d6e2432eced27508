use clap::Parser;
use tracing_subscriber::EnvFilter;

use venue_catalog::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG takes precedence over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("venue_catalog=debug,tower_http=debug,info")
        } else {
            EnvFilter::new("venue_catalog=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Serve(args) => {
            web::server::run(args)?;
        }
        cli::Commands::Venues(args) => {
            cli::venues::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
