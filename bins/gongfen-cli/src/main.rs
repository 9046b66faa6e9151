//! gongfen-cli — Command-line interface to the Gongfen merit engine.
//!
//! Reads contribution maps as JSON objects (`{"alice": 9, "bob": 7}`) and
//! prints results as JSON, so task-close computations can be reproduced
//! outside the application when a score is disputed.

mod config;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gongfen_core::traits::{ContributionNormalizer, TimeCoefficientCalculator};
use gongfen_core::types::{ContributionMap, TeamScoreBudget};
use gongfen_engine::{LateLadder, MeritEngine, individual_share_score, rank};
use serde_json::json;
use tracing::{debug, info};

/// Gongfen merit engine command-line interface.
#[derive(Parser)]
#[command(name = "gongfen-cli")]
#[command(version, about = "Merit-point (功分) distribution for collaborative work.")]
struct Cli {
    /// Engine config file (default: <config_dir>/gongfen/config.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format: "text" or "json".
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize contributions into merit scores.
    Normalize(NormalizeArgs),
    /// Compute the time coefficient for a planned/actual date pair.
    TimeCoef(TimeCoefArgs),
    /// Convert individual points into a share of a fixed pool.
    Share(ShareArgs),
    /// Normalize contributions and list participants by merit, highest first.
    Rank(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with an id → contribution object ("-" for stdin).
    #[arg(short, long, default_value = "-")]
    input: PathBuf,
}

#[derive(Args)]
struct NormalizeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Rescale the merits so they sum to this budget.
    #[arg(short, long)]
    budget: Option<f64>,
}

#[derive(Args)]
struct TimeCoefArgs {
    /// Planned due date (YYYY-MM-DD).
    #[arg(long)]
    due: Option<NaiveDate>,

    /// Actual completion date (YYYY-MM-DD).
    #[arg(long)]
    actual: Option<NaiveDate>,

    /// Planned start date, used for the planned duration (YYYY-MM-DD).
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Override the configured late ladder (overtime_ratio or fixed_days).
    #[arg(long)]
    ladder: Option<LateLadder>,
}

#[derive(Args)]
struct ShareArgs {
    /// The individual's points.
    #[arg(long)]
    points: f64,

    /// The whole team's points.
    #[arg(long)]
    total: f64,

    /// Pool size to distribute.
    #[arg(long, default_value_t = gongfen_core::constants::FUNCTIONAL_SCORE_POOL)]
    pool: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let mut engine_config = config::load(cli.config.as_deref())?;
    if let Commands::TimeCoef(TimeCoefArgs {
        ladder: Some(ladder),
        ..
    }) = &cli.command
    {
        engine_config.late_ladder = *ladder;
    }
    let engine = MeritEngine::with_config(engine_config).context("invalid engine configuration")?;
    debug!(config = ?engine.config(), "engine ready");

    let output = match cli.command {
        Commands::Normalize(args) => cmd_normalize(&engine, args)?,
        Commands::TimeCoef(args) => cmd_time_coef(&engine, args),
        Commands::Share(args) => cmd_share(args)?,
        Commands::Rank(args) => cmd_rank(&engine, args)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_logging(level: &str, format: &str) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry.with(fmt::layer().json().with_writer(io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

fn read_contributions(path: &Path) -> Result<ContributionMap> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read contributions from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    parse_contributions(&raw)
}

fn parse_contributions(raw: &str) -> Result<ContributionMap> {
    serde_json::from_str(raw).context("contributions must be a JSON object of id → number")
}

fn cmd_normalize(engine: &MeritEngine, args: NormalizeArgs) -> Result<serde_json::Value> {
    let contributions = read_contributions(&args.input.input)?;
    let merit = match args.budget {
        Some(total) => {
            let budget = TeamScoreBudget::new(total)?;
            engine.distribute(&contributions, budget)?
        }
        None => engine.normalize(&contributions)?,
    };
    info!(participants = merit.len(), "normalized contributions");
    Ok(serde_json::to_value(merit)?)
}

fn cmd_time_coef(engine: &MeritEngine, args: TimeCoefArgs) -> serde_json::Value {
    let coefficient = engine.coefficient_for(args.due, args.actual, args.start);
    json!({
        "coefficient": coefficient.value(),
        "ladder": engine.config().late_ladder.as_str(),
    })
}

fn cmd_share(args: ShareArgs) -> Result<serde_json::Value> {
    if !args.pool.is_finite() {
        bail!("pool size must be a finite number, got {}", args.pool);
    }
    Ok(json!({ "score": individual_share_score(args.points, args.total, args.pool) }))
}

fn cmd_rank(engine: &MeritEngine, args: InputArgs) -> Result<serde_json::Value> {
    let merit = engine.normalize(&read_contributions(&args.input)?)?;
    let ranked: Vec<serde_json::Value> = rank(&merit)
        .into_iter()
        .enumerate()
        .map(|(i, (id, score))| json!({ "rank": i + 1, "participant": id, "merit": score }))
        .collect();
    Ok(serde_json::Value::Array(ranked))
}
