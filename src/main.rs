use anyhow::{Context, Result};
use bugzoo_core::catalog;
use bugzoo_core::config::ZooConfig;
use bugzoo_core::generator::analyze_text;
use bugzoo_core::simulation::TickReport;
use bugzoo_core::{init_logging, Metrics};
use bugzoo_lib::{drive, DriveOptions, Session, ShutdownManager};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Turns source code into an evolving zoo of bug creatures", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hatch a zoo from source text and let it evolve
    Run {
        /// Source file to read; stdin when omitted
        input: Option<PathBuf>,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds between ticks
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many ticks
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Custom config file path
        #[arg(short, long, default_value = "bugzoo.toml")]
        config: PathBuf,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show what the analyzer sees in source text
    Analyze {
        /// Source file to read; stdin when omitted
        input: Option<PathBuf>,
    },
    /// List every archetype
    Catalog,
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn run(
    input: Option<&Path>,
    seed: Option<u64>,
    interval_ms: Option<u64>,
    ticks: Option<u64>,
    config_path: &Path,
    json: bool,
) -> Result<()> {
    let mut config = ZooConfig::load(config_path)?;
    if let Some(ms) = interval_ms {
        config.session.tick_interval_ms = ms;
    }
    config.validate()?;
    tracing::info!(fingerprint = %config.fingerprint(), "Loaded config");

    let text = read_input(input)?;
    // A seed in the config file only counts for deterministic sessions.
    let seed = seed.or_else(|| config.session.seed.filter(|_| config.session.deterministic));
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };
    let mut session = Session::from_text(&text, config, &mut rng)?;

    if !json {
        for event in &session.events {
            println!("  {event}");
        }
        println!("{}", session.narration);
    }

    let mut options = DriveOptions::from_session(&session);
    options.max_ticks = ticks;
    let shutdown = ShutdownManager::new();
    shutdown.listen_for_ctrl_c();
    let metrics = Metrics::new();

    let print_tick = |s: &mut Session, report: &TickReport| {
        if json {
            return;
        }
        let skip = s.events.len().saturating_sub(report.event_count());
        println!(
            "[tick {}] {} creatures, chaos {}",
            s.tick_count,
            s.creatures.len(),
            s.chaos_level
        );
        for event in s.events.iter().skip(skip) {
            println!("  {event}");
        }
        if s.tick_count % s.config().session.narration_interval == 0 {
            println!("{}", s.narration);
        }
    };

    let reason = drive(&mut session, &mut rng, options, &shutdown, &metrics, print_tick).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        let stats = session.stats();
        println!(
            "Stopped ({reason:?}) after {} ticks: {} creatures, {} hp total, avg aggression {}, {} active threats",
            session.tick_count,
            stats.total_creatures,
            stats.total_hp,
            stats.average_aggression,
            stats.active_threats
        );
    }
    Ok(())
}

fn analyze(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let Some(analysis) = analyze_text(&text) else {
        println!("No code detected.");
        return Ok(());
    };
    println!("Seed: {}", analysis.seed);
    println!("Target population: {}", analysis.target_population);
    for pattern in &analysis.patterns {
        println!("  {pattern} -> {}", pattern.category());
    }
    Ok(())
}

fn print_catalog() {
    for archetype in catalog::all() {
        println!(
            "{:<14} {:<16} {:<9} {}",
            archetype.name,
            archetype.category.as_str(),
            archetype.severity.as_str(),
            archetype.label
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Run {
            input,
            seed,
            interval_ms,
            ticks,
            config,
            json,
        } => run(input.as_deref(), seed, interval_ms, ticks, &config, json).await,
        Command::Analyze { input } => analyze(input.as_deref()),
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
    }
}
