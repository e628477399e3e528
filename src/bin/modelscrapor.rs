//! ModelScrapOR CLI binary.
//!
//! OpenRouter model rankings and pricing tracker.
//!
//! # Commands
//!
//! - `report` - Fetch the catalog and write the HTML report + stylesheet
//! - `fetch` - Fetch and normalize the catalog without rendering
//! - `categories` - Show the active category/keyword configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modelscrapor::{
    catalog::{normalize, OpenRouterClient},
    categorize::Categorizer,
    config::Config,
    error::Error,
    rank::Ranker,
    report::{render_css, render_html, write_report},
    VERSION,
};

#[derive(Parser)]
#[command(name = "modelscrapor")]
#[command(version = VERSION)]
#[command(about = "OpenRouter model rankings & pricing tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog and generate the HTML report
    Report {
        /// Output directory for the report files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Cap on the free-tier shortlist
        #[arg(long)]
        free_cap: Option<usize>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fetch and normalize the catalog without rendering
    Fetch {
        /// TOML config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print normalized records as JSON instead of counts
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the active category/keyword configuration
    Categories {
        /// TOML config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Matches the original tool's .env convention for the API key.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            output,
            config,
            free_cap,
            verbose,
        } => cmd_report(output, config, free_cap, verbose),

        Commands::Fetch {
            config,
            json,
            verbose,
        } => cmd_fetch(config, json, verbose),

        Commands::Categories { config } => cmd_categories(config),
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();
}

fn cmd_report(
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    free_cap: Option<usize>,
    verbose: bool,
) -> anyhow::Result<()> {
    init_logging(verbose);

    let mut config = Config::load(config_path.as_deref())?;
    if let Some(output) = output {
        config.report.output_dir = output;
    }
    if let Some(cap) = free_cap {
        config.report.free_cap = cap;
    }

    // Credential check happens before any network activity.
    let api_key = config.require_api_key()?.to_string();

    let client = OpenRouterClient::new(&api_key, &config.api)?;
    let raw = client.fetch_raw_catalog()?;
    let (models, stats) = normalize(&raw);
    if models.is_empty() {
        return Err(Error::EmptyCatalog.into());
    }
    tracing::info!(
        "Categorizing {} models ({} skipped)...",
        stats.fetched,
        stats.skipped
    );

    let assignment = Categorizer::new(config.categories.clone()).assign(&models);
    let ranker = Ranker::new(config.report.free_cap);

    let date_str = chrono::Local::now().format("%Y-%m-%d").to_string();
    tracing::info!("Generating HTML report...");
    let html = render_html(
        &assignment,
        &ranker,
        &date_str,
        config.report.top_n,
        config.report.conversation,
    );
    let css = render_css();

    write_report(&config.report.output_dir, &date_str, &html, css)?;
    tracing::info!("Report generation complete");
    Ok(())
}

fn cmd_fetch(config_path: Option<PathBuf>, json: bool, verbose: bool) -> anyhow::Result<()> {
    init_logging(verbose);

    let config = Config::load(config_path.as_deref())?;
    let api_key = config.require_api_key()?.to_string();

    let client = OpenRouterClient::new(&api_key, &config.api)?;
    let raw = client.fetch_raw_catalog()?;
    let (models, stats) = normalize(&raw);
    if models.is_empty() {
        return Err(Error::EmptyCatalog.into());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
    } else {
        println!("fetched: {}", stats.fetched);
        println!("skipped: {}", stats.skipped);
    }
    Ok(())
}

fn cmd_categories(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_path.as_deref())?;

    for rule in &config.categories.rules {
        let fallback = if config.categories.fallback.contains(&rule.name) {
            " (general fallback)"
        } else {
            ""
        };
        println!("{}{}: {}", rule.name, fallback, rule.keywords.join(", "));
    }
    Ok(())
}
