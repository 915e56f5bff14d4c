use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use brasserie_catalog::{
    config::AppConfig,
    models::quiz::{Adventure, Aroma, Finish, Intensity, Occasion, QuizAnswers},
    services::{
        catalog_client, data_loader::DataLoader, ics, quiz_engine,
        update_watcher::UpdateWatcher,
    },
};

#[derive(Parser)]
#[command(name = "brasserie-catalog", version, about = "L'École du Bélier site data")]
struct Cli {
    /// Use a catalog snapshot file instead of fetching the public catalog
    #[arg(long, global = true, conflicts_with = "offline")]
    catalog_file: Option<PathBuf>,

    /// Ignore the public catalog and use bundled data only
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List beers (catalog first, bundled fallback)
    Beers,
    /// List upcoming releases
    Releases,
    /// Recommend a beer from quiz answers
    Recommend {
        #[arg(long)]
        intensity: Intensity,
        #[arg(long)]
        aroma: Aroma,
        #[arg(long)]
        occasion: Occasion,
        #[arg(long)]
        finish: Finish,
        #[arg(long)]
        adventure: Adventure,
    },
    /// List agenda events
    Events,
    /// List brewhouse equipment
    Equipment,
    /// List brewing process steps
    Process,
    /// Print the iCalendar file of an agenda event
    Ics {
        event_id: String,
        /// All-day placeholder instead of the timed event
        #[arg(long)]
        all_day: bool,
    },
    /// Show the catalog URL and freshness stamp
    Meta,
    /// Poll the public catalog and log new publications
    Watch,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Structured logging on stderr, stdout carries the command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    metrics::describe_counter!("catalog_fetch_total", "Public catalog fetch attempts by outcome");
    metrics::describe_histogram!("catalog_fetch_seconds", "Time to fetch and parse the public catalog");
    metrics::describe_counter!("catalog_fallback_total", "Loads served from bundled data");
    metrics::describe_counter!("catalog_updates_detected_total", "New catalog publications seen by the watcher");
    metrics::describe_counter!("quiz_recommendations_total", "Quiz recommendations computed");

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}

fn build_loader(cli: &Cli, config: &AppConfig) -> Result<DataLoader, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.catalog_file {
        tracing::info!(path = %path.display(), "Loading catalog snapshot");
        let json = std::fs::read_to_string(path)?;
        return Ok(DataLoader::from_catalog(catalog_client::parse_catalog(&json)?));
    }

    if cli.offline {
        return Ok(DataLoader::offline());
    }

    Ok(DataLoader::new(config)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let loader = build_loader(&cli, &config)?;

    match cli.command {
        Command::Beers => print_json(&loader.load_beers().await?),
        Command::Releases => print_json(&loader.load_releases().await?),
        Command::Recommend {
            intensity,
            aroma,
            occasion,
            finish,
            adventure,
        } => {
            let answers = QuizAnswers {
                intensity,
                aroma,
                occasion,
                finish,
                adventure,
            };
            let beers = loader.load_beers().await?;
            print_json(&quiz_engine::recommend_beer(&beers, &answers)?)
        }
        Command::Events => print_json(&loader.load_events()?),
        Command::Equipment => print_json(&loader.load_equipment()?),
        Command::Process => print_json(&loader.load_brewing_steps()?),
        Command::Ics { event_id, all_day } => {
            let event = loader
                .find_event(&event_id)?
                .ok_or_else(|| format!("Unknown event '{}'", event_id))?;
            let calendar = if all_day {
                ics::build_all_day_placeholder_ics(&event)?
            } else {
                ics::build_event_ics(&event)
            };
            print!("{}", calendar);
            Ok(())
        }
        Command::Meta => print_json(&loader.catalog_meta().await),
        Command::Watch => {
            let meta = loader
                .catalog_meta()
                .await
                .ok_or("No public catalog URL configured")?;
            let client = loader
                .catalog_client()
                .ok_or("No public catalog URL configured")?;
            UpdateWatcher::new(&meta).watch(client).await;
            Ok(())
        }
    }
}
