use clap::{Args, Subcommand};
use serde_json::Value;

use crate::catalog::store::VenueCatalog;
use crate::cli::{DataArgs, OutputFormat};
use crate::core::venue::Venue;

#[derive(Args)]
pub struct VenuesArgs {
    #[command(subcommand)]
    pub command: VenuesCommands,
}

#[derive(Subcommand)]
pub enum VenuesCommands {
    /// List all venues in the data file
    List {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Show a single venue
    Show {
        /// Venue ID (matched exactly, case-sensitive)
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Validate the data file and report duplicate ids
    Check {
        #[command(flatten)]
        data: DataArgs,
    },
}

pub fn run(args: VenuesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        VenuesCommands::List { data } => run_list(&data, format, verbose),
        VenuesCommands::Show { id, data } => run_show(&id, &data, format),
        VenuesCommands::Check { data } => run_check(&data, format),
    }
}

fn run_list(data: &DataArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = data.load_catalog()?;

    if verbose {
        eprintln!("Loaded catalog with {} venues", catalog.len());
    }

    match format {
        OutputFormat::Text => {
            let id_width = catalog
                .venues()
                .iter()
                .map(|v| v.id().as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let name_width = catalog
                .venues()
                .iter()
                .map(|v| v.display_name().unwrap_or("-").chars().count().min(40))
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Venue Catalog ({} venues)\n", catalog.len());
            println!(
                "{:<id_w$} {:<name_w$} {:>6}",
                "ID",
                "Name",
                "Fields",
                id_w = id_width,
                name_w = name_width,
            );
            println!("{}", "-".repeat(id_width + name_width + 8));

            for venue in catalog.venues() {
                println!(
                    "{:<id_w$} {:<name_w$} {:>6}",
                    venue.id().as_str(),
                    truncate(venue.display_name().unwrap_or("-"), name_width),
                    venue.record().len(),
                    id_w = id_width,
                    name_w = name_width,
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.venues())?);
        }
        OutputFormat::Tsv => {
            println!("id\tname");
            for venue in catalog.venues() {
                println!("{}\t{}", venue.id(), venue.display_name().unwrap_or(""));
            }
        }
    }

    Ok(())
}

fn run_show(id: &str, data: &DataArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = data.load_catalog()?;
    let venue = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Venue '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Venue: {}\n", display_label(venue));
            for (field, value) in venue.record() {
                println!("{:<16} {}", format!("{field}:"), render_value(value));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(venue)?);
        }
        OutputFormat::Tsv => {
            println!("field\tvalue");
            for (field, value) in venue.record() {
                println!("{field}\t{}", render_value(value));
            }
        }
    }

    Ok(())
}

fn run_check(data: &DataArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = data.load_catalog()?;
    let report = CheckReport::from_catalog(&catalog);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "venues": report.venues,
                    "duplicate_ids": report.duplicate_ids,
                }))?
            );
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            println!("Venues: {}", report.venues);
            if report.duplicate_ids.is_empty() {
                println!("No duplicate ids");
            } else {
                println!("Duplicate ids: {}", report.duplicate_ids.join(", "));
            }
        }
    }

    if !report.duplicate_ids.is_empty() {
        anyhow::bail!(
            "{} duplicate venue id(s); lookups only return the first record for each",
            report.duplicate_ids.len()
        );
    }

    Ok(())
}

/// Summary of a data file validation
#[derive(Debug, PartialEq, Eq)]
struct CheckReport {
    venues: usize,
    duplicate_ids: Vec<String>,
}

impl CheckReport {
    fn from_catalog(catalog: &VenueCatalog) -> Self {
        Self {
            venues: catalog.len(),
            duplicate_ids: catalog
                .duplicate_ids()
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Strings print bare; everything else prints as compact JSON
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

fn display_label(venue: &Venue) -> &str {
    venue.display_name().unwrap_or(venue.id().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Grand Hall", 20), "Grand Hall");
        assert_eq!(truncate("Riverside Room", 10), "Riversi...");
        assert_eq!(truncate("Salle des fêtes", 8), "Salle...");
    }

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!("Grand Hall")), "Grand Hall");
        assert_eq!(render_value(&json!(250)), "250");
        assert_eq!(render_value(&json!({"max": 10})), r#"{"max":10}"#);
    }

    #[test]
    fn test_check_report() {
        let catalog =
            VenueCatalog::from_json(r#"[{"id":"a"},{"id":"b"},{"id":"a"}]"#).unwrap();
        assert_eq!(
            CheckReport::from_catalog(&catalog),
            CheckReport {
                venues: 3,
                duplicate_ids: vec!["a".to_string()],
            }
        );
    }
}
