use book_assign::config::Settings;
use book_assign::core::{Assigner, CostMatrixBuilder, HungarianSolver};
use book_assign::models::{ScoreSource, ScoringPolicy};
use book_assign::services::{render_assignments, render_debug, render_json, ScoreTableLoader};
use clap::{ArgGroup, Parser};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Assign books to people based on preferences.
#[derive(Debug, Parser)]
#[command(name = "book-assign", version)]
#[command(group(ArgGroup::new("source").required(true).args(["csv_file", "drive_id"])))]
struct Cli {
    /// Path to local CSV file
    #[arg(long)]
    csv_file: Option<PathBuf>,

    /// Google Drive spreadsheet ID
    #[arg(long)]
    drive_id: Option<String>,

    /// Enable evil mode (what could possibly go wrong?)
    #[arg(long)]
    evil_mode: bool,

    /// Seed for evil mode's random scores
    #[arg(long)]
    seed: Option<u64>,

    /// Print the parsed items, people and preference matrix
    #[arg(long)]
    debug: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Extra configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(settings: &Settings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings);

    match run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let source = match (cli.csv_file, cli.drive_id) {
        (Some(path), _) => ScoreSource::LocalFile(path),
        (None, Some(id)) => ScoreSource::RemoteSheet(id),
        (None, None) => return Err("provide either --csv-file or --drive-id".into()),
    };

    let loader = ScoreTableLoader::new(settings.loader.clone())?;
    let table = loader.load(&source).await?;

    let policy = if cli.evil_mode {
        ScoringPolicy::Inverted
    } else {
        settings.assignment.policy
    };

    let assigner = Assigner::new(
        policy,
        CostMatrixBuilder::new(settings.assignment.score_range),
        HungarianSolver::new(settings.solver),
    );

    info!(
        "Assigning {} items to {} agents ({} policy)",
        table.items.len(),
        table.agents.len(),
        policy
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let random_source: Option<&mut dyn RngCore> =
        if policy == ScoringPolicy::Inverted && settings.assignment.randomize_inverted {
            Some(&mut rng)
        } else {
            None
        };

    let (report, cost) = assigner.assign(&table, random_source)?;

    if cli.debug {
        print!("{}", render_debug(&table, assigner.effective_scores(&table, &cost), policy));
    }

    if cli.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_assignments(&report));
    }

    Ok(())
}
