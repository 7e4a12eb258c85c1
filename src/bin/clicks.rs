//! Command-line tool for reformatting Short.io click logs offline.
//!
//! Runs the same mapping as the HTTP service against a JSON file saved from
//! the Short.io `last_clicks` API, or against the built-in sample records.
//!
//! # Usage
//!
//! ```bash
//! # Map a saved response, rendered in Korea Standard Time
//! cargo run --bin clicks -- map last_clicks.json --tz Asia/Seoul
//!
//! # Newest first, as CSV
//! cargo run --bin clicks -- map last_clicks.json --order latest --format csv > clicks.csv
//!
//! # Try the mapping on the built-in sample
//! cargo run --bin clicks -- sample --format json
//!
//! # City / path coverage
//! cargo run --bin clicks -- summary last_clicks.json
//! ```

use shortio_clicks::application::services::click_service::ClickSummary;
use shortio_clicks::domain::click_export::write_csv;
use shortio_clicks::domain::click_mapper::map_clicks;
use shortio_clicks::domain::click_order::ClickOrder;
use shortio_clicks::domain::entities::{ClickView, RawClick};
use shortio_clicks::domain::sources::ClickSource;
use shortio_clicks::domain::timezone::DisplayTimezone;
use shortio_clicks::infrastructure::sources::{FileClickSource, SampleClickSource};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};

/// CLI tool for reformatting Short.io click logs.
#[derive(Parser)]
#[command(name = "clicks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Map clicks from a JSON file
    Map {
        /// JSON file holding an array of raw click records
        file: PathBuf,

        #[command(flatten)]
        opts: MapOptions,
    },

    /// Map the built-in sample clicks
    Sample {
        #[command(flatten)]
        opts: MapOptions,
    },

    /// Count clicks with a city and a path
    Summary {
        /// JSON file holding an array of raw click records
        file: PathBuf,
    },
}

#[derive(clap::Args)]
struct MapOptions {
    /// Display timezone (UTC or Asia/Seoul)
    #[arg(long, default_value_t = DisplayTimezone::Utc)]
    tz: DisplayTimezone,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Row order (source or latest)
    #[arg(long, default_value_t = ClickOrder::Source)]
    order: ClickOrder,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Map { file, opts } => {
            let raw = load_file(&file).await?;
            print_clicks(&raw, &opts)
        }
        Commands::Sample { opts } => print_clicks(&SampleClickSource::records(), &opts),
        Commands::Summary { file } => {
            let raw = load_file(&file).await?;
            print_summary(&raw);
            Ok(())
        }
    }
}

/// Reads every record from a click file.
async fn load_file(path: &Path) -> Result<Vec<RawClick>> {
    FileClickSource::new(path)
        .last_clicks(usize::MAX)
        .await
        .with_context(|| format!("Failed to load clicks from {}", path.display()))
}

/// Maps clicks and prints them in the requested format.
fn print_clicks(raw: &[RawClick], opts: &MapOptions) -> Result<()> {
    let mut views = map_clicks(raw, opts.tz);
    opts.order.apply(&mut views);

    match opts.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Csv => {
            write_csv(&views, std::io::stdout().lock()).context("Failed to write CSV")?;
        }
        OutputFormat::Table => print_table(&views, opts.tz),
    }

    Ok(())
}

/// Prints clicks as an aligned table.
///
/// # Output Format
///
/// ```text
/// 🔗 Recent clicks (Asia/Seoul)
///
///   Date        Time      Path          City          Link
///   ──────────────────────────────────────────────────────────────────────────
///   2020-05-20  15:19:12  /login        Mumbai        https://app.short.cm/login
///   2020-05-21  00:30:45  /dashboard    -             https://app.short.cm/dashboard
/// ```
fn print_table(views: &[ClickView], tz: DisplayTimezone) {
    println!(
        "{} {}",
        "🔗 Recent clicks".bright_blue().bold(),
        format!("({})", tz).bright_black()
    );
    println!();

    if views.is_empty() {
        println!("{}", "  No clicks found".yellow());
        return;
    }

    println!(
        "  {:<11} {:<9} {:<13} {:<13} {}",
        "Date".bright_white().bold(),
        "Time".bright_white().bold(),
        "Path".bright_white().bold(),
        "City".bright_white().bold(),
        "Link".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for view in views {
        println!(
            "  {:<11} {:<9} {:<13} {:<13} {}",
            or_dash(&view.date).bright_black(),
            or_dash(&view.time).bright_black(),
            or_dash(&view.path).cyan(),
            or_dash(&view.city),
            view.link.bright_white()
        );
    }

    println!();
    println!("  Total: {}", views.len().to_string().bright_white().bold());
    println!();
}

/// Prints how many clicks have a city and a path.
fn print_summary(raw: &[RawClick]) {
    let views = map_clicks(raw, DisplayTimezone::Utc);
    let summary = ClickSummary::from_views(&views);

    println!("{}", "📈 Click summary".bright_blue().bold());
    println!();
    println!("  Total clicks:     {}", summary.total.to_string().bright_white().bold());
    println!("  With city:        {}", summary.with_city.to_string().green());
    println!("  With path:        {}", summary.with_path.to_string().green());
    println!();
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_map_defaults() {
        let cli = Cli::try_parse_from(["clicks", "map", "last_clicks.json"]).unwrap();

        match cli.command {
            Commands::Map { file, opts } => {
                assert_eq!(file, PathBuf::from("last_clicks.json"));
                assert_eq!(opts.tz, DisplayTimezone::Utc);
                assert_eq!(opts.order, ClickOrder::Source);
                assert!(matches!(opts.format, OutputFormat::Table));
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn test_sample_options() {
        let cli = Cli::try_parse_from([
            "clicks", "sample", "--tz", "Asia/Seoul", "--order", "latest", "-f", "csv",
        ])
        .unwrap();

        match cli.command {
            Commands::Sample { opts } => {
                assert_eq!(opts.tz, DisplayTimezone::AsiaSeoul);
                assert_eq!(opts.order, ClickOrder::Latest);
                assert!(matches!(opts.format, OutputFormat::Csv));
            }
            _ => panic!("expected sample command"),
        }
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        assert!(Cli::try_parse_from(["clicks", "sample", "--tz", "Europe/Paris"]).is_err());
    }
}
