//! `outbreak` — run epidemic simulations from the command line.
//!
//! ```text
//! outbreak simulate --r0 2.5 --ifr 0.01 --population 10000 --network-size 30
//! outbreak simulate --config run.json --out ./output --store ./runs
//! outbreak herd-immunity --r0 3
//! outbreak show --store ./runs <run-id>
//! ```

mod logging;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, info};

use epi_core::{DEFAULT_ILLNESS_LENGTH, DiseaseParams, NetworkSampling, OutbreakConfig};
use epi_output::{
    CsvWriter, HerdImmunityReport, JsonRunStore, OutbreakReport, OutputObserver, RunId, RunStore,
    StoredRun,
};
use epi_sim::{HistoryRecord, NoopObserver, OutbreakBuilder};

#[derive(Parser)]
#[command(name = "outbreak")]
#[command(about = "Agent-based simulation of an epidemic outbreak")]
struct Cli {
    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one outbreak and print its day-by-day fractions
    Simulate(SimulateArgs),
    /// Print the herd-immunity threshold 1 - 1/R0
    HerdImmunity {
        /// Basic reproduction number
        #[arg(long = "r0")]
        r0: f64,
    },
    /// Print a stored run
    Show {
        /// Directory of the JSON run store
        #[arg(long)]
        store: PathBuf,
        /// Run id printed by `simulate --store`
        id: RunId,
    },
    /// List stored run ids
    List {
        /// Directory of the JSON run store
        #[arg(long)]
        store: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Sampling {
    WithReplacement,
    Distinct,
}

impl From<Sampling> for NetworkSampling {
    fn from(s: Sampling) -> Self {
        match s {
            Sampling::WithReplacement => NetworkSampling::WithReplacement,
            Sampling::Distinct => NetworkSampling::Distinct,
        }
    }
}

#[derive(Args)]
struct SimulateArgs {
    /// JSON file with run parameters; flags given alongside override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Basic reproduction number
    #[arg(long = "r0")]
    r0: Option<f64>,
    /// Infection fatality rate in [0, 1]
    #[arg(long)]
    ifr: Option<f64>,
    /// Number of agents
    #[arg(long)]
    population: Option<usize>,
    /// Contacts per agent; 0 selects uniform mixing
    #[arg(long)]
    network_size: Option<usize>,
    /// Days an infection lasts
    #[arg(long)]
    illness_length: Option<u32>,
    /// Upper bound on recorded days
    #[arg(long)]
    max_days: Option<u32>,
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// How contact lists are drawn
    #[arg(long, value_enum)]
    sampling: Option<Sampling>,

    /// Write history.csv into this directory
    #[arg(long)]
    out: Option<PathBuf>,
    /// Save the run into this JSON run store directory
    #[arg(long)]
    store: Option<PathBuf>,
    /// Save the run into this SQLite database
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: Option<PathBuf>,
    /// Print the full report as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

impl SimulateArgs {
    fn to_config(&self) -> Result<OutbreakConfig> {
        let mut config = match &self.config {
            Some(path) => OutbreakConfig::read_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => {
                let (Some(r0), Some(ifr), Some(population)) = (self.r0, self.ifr, self.population)
                else {
                    bail!("--r0, --ifr and --population are required without --config");
                };
                let illness_length = self.illness_length.unwrap_or(DEFAULT_ILLNESS_LENGTH);
                OutbreakConfig::new(DiseaseParams::new(r0, ifr, illness_length), population)
            }
        };

        if let Some(r0) = self.r0 {
            config.params.r0 = r0;
        }
        if let Some(ifr) = self.ifr {
            config.params.ifr = ifr;
        }
        if let Some(n) = self.illness_length {
            config.params.illness_length = n;
        }
        if let Some(n) = self.population {
            config.population_size = n;
        }
        if let Some(n) = self.network_size {
            config.network_size = n;
        }
        if let Some(n) = self.max_days {
            config.max_days = n;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(s) = self.sampling {
            config.network_sampling = s.into();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    match cli.command {
        Commands::Simulate(args) => simulate(&args),
        Commands::HerdImmunity { r0 } => {
            println!("{}", serde_json::to_string(&HerdImmunityReport::new(r0)?)?);
            Ok(())
        }
        Commands::Show { store, id } => {
            let run = JsonRunStore::open(&store)?.load(id)?;
            println!("{}", serde_json::to_string_pretty(&run)?);
            Ok(())
        }
        Commands::List { store } => {
            for id in JsonRunStore::open(&store)?.list()? {
                println!("{id}");
            }
            Ok(())
        }
    }
}

fn simulate(args: &SimulateArgs) -> Result<()> {
    let config = args.to_config()?;
    let history = match &args.out {
        Some(dir) => run_with_csv(&config, dir)?,
        None => OutbreakBuilder::new(config.clone()).build()?.run(&mut NoopObserver)?,
    };
    let report = OutbreakReport::from_history(&history);

    store_run(args, &config, &report)?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print_summary(&history);
    }
    Ok(())
}

fn run_with_csv(config: &OutbreakConfig, dir: &Path) -> Result<HistoryRecord> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut obs = OutputObserver::new(CsvWriter::new(dir)?);
    let history = OutbreakBuilder::new(config.clone()).build()?.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing history.csv");
    }
    info!("wrote {} days to {}", obs.days_written(), dir.display());
    Ok(history)
}

/// Save into whichever stores were requested.
fn store_run(args: &SimulateArgs, config: &OutbreakConfig, report: &OutbreakReport) -> Result<()> {
    let run = StoredRun::new(config.clone(), report.clone());
    if let Some(dir) = &args.store {
        let id = JsonRunStore::open(dir)?.save(&run)?;
        eprintln!("stored run {id}");
    }
    #[cfg(feature = "sqlite")]
    if let Some(path) = &args.sqlite {
        let id = epi_output::SqliteRunStore::open(path)?.save(&run)?;
        eprintln!("stored run {id} in {}", path.display());
    }
    Ok(())
}

fn print_summary(history: &HistoryRecord) {
    let Some(last) = history.last() else {
        return;
    };
    println!("days simulated   {}", history.len());
    if let Some(peak) = history.peak_infected() {
        println!("peak infected    {:.4} on {}", peak.infected, peak.day);
    }
    println!("final immune     {:.4}", last.immune);
    println!("deaths           {:.4}", last.deaths);
}
