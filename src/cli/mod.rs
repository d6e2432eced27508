//! Command-line interface for venue-catalog.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **serve**: Start the HTTP API
//! - **venues**: List, show, or check venues in a data file
//!
//! ## Usage
//!
//! ```text
//! # Serve venues.json from next to the binary
//! venue-catalog serve
//!
//! # Serve a specific data file on a custom port
//! venue-catalog serve --data data/venues.json --port 3000
//!
//! # Inspect the data without starting a server
//! venue-catalog venues list --data data/venues.json
//! venue-catalog venues show 1 --data data/venues.json --format json
//! venue-catalog venues check --data data/venues.json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::store::{default_data_path, VenueCatalog};

pub mod venues;

#[derive(Parser)]
#[command(name = "venue-catalog")]
#[command(version)]
#[command(about = "Serve a static catalog of venues over a read-only HTTP API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// Inspect the venue data file
    Venues(venues::VenuesArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8001")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "0.0.0.0")]
    pub address: String,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Location of the venue data file
#[derive(clap::Args, Clone, Debug, Default)]
pub struct DataArgs {
    /// Path to the venue data file (defaults to venues.json next to the executable)
    #[arg(long = "data", env = "VENUE_CATALOG_DATA")]
    pub path: Option<PathBuf>,
}

impl DataArgs {
    /// The explicit path if one was given, otherwise the default location
    ///
    /// # Errors
    ///
    /// Returns an error if no path was given and the executable's location
    /// cannot be determined.
    pub fn resolve(&self) -> anyhow::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(default_data_path()?),
        }
    }

    /// Resolve the data path and load the catalog from it
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub fn load_catalog(&self) -> anyhow::Result<VenueCatalog> {
        let path = self.resolve()?;
        let catalog = VenueCatalog::load_from_file(&path)?;
        tracing::info!(
            path = %path.display(),
            venues = catalog.len(),
            "Venue catalog loaded"
        );
        Ok(catalog)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["venue-catalog", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 8001);
        assert_eq!(args.address, "0.0.0.0");
    }

    #[test]
    fn test_serve_with_data_path() {
        let cli = Cli::try_parse_from([
            "venue-catalog",
            "serve",
            "--port",
            "3000",
            "--data",
            "data/venues.json",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.port, 3000);
        assert_eq!(args.data.path, Some(PathBuf::from("data/venues.json")));
    }

    #[test]
    fn test_explicit_data_path_wins() {
        let args = DataArgs {
            path: Some(PathBuf::from("/srv/venues.json")),
        };
        assert_eq!(args.resolve().unwrap(), PathBuf::from("/srv/venues.json"));
    }

    #[test]
    fn test_missing_data_path_uses_default() {
        let args = DataArgs::default();
        assert_eq!(args.resolve().unwrap(), default_data_path().unwrap());
    }
}
