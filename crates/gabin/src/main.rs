mod catalog_io;
mod fixtures;
mod printer;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ga::{Ga, GaParams};
use sched_core::ScheduleData;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::{Lock, SubjectRequest};

#[derive(Parser)]
#[command(name = "gabin", about = "Genetic-algorithm university timetable solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the GA against a JSON catalog and print the best schedule found.
    Solve {
        catalog: PathBuf,
        #[arg(long, default_value_t = 1000)]
        individuals: usize,
        #[arg(long, default_value_t = 1100)]
        iterations: usize,
        #[arg(long, default_value_t = 360)]
        selection: usize,
        #[arg(long, default_value_t = 220)]
        crossover: usize,
        #[arg(long, default_value_t = 49)]
        mutation_chance: u8,
        /// Master RNG seed; omit for nondeterministic entropy.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a synthetic catalog for benchmarking.
    Fixture {
        #[arg(long, default_value_t = 200)]
        requests: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Serialize)]
struct FixtureFile {
    requests: Vec<SubjectRequest>,
    locks: Vec<Lock>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            catalog,
            individuals,
            iterations,
            selection,
            crossover,
            mutation_chance,
            seed,
        } => {
            let (requests, locks) = catalog_io::load(&catalog)?;
            let data = Arc::new(ScheduleData::new(requests, locks)?);
            let params = GaParams::new(individuals, iterations, selection, crossover, mutation_chance)?;
            tracing::info!(requests = data.len(), individuals, iterations, "starting solve");

            let population = Ga::new(params).run(data.clone(), seed);
            let best = &population[0];
            println!("{}", printer::render(&data, best.chromosomes()));
            tracing::info!(fitness = ?best.fitness(), "solve complete");
        }
        Command::Fixture { requests, seed, out } => {
            let requests = fixtures::random_catalog(seed, requests);
            let json = serde_json::to_string_pretty(&FixtureFile { requests, locks: vec![] })?;
            std::fs::write(&out, json)?;
            tracing::info!(path = %out.display(), "wrote fixture catalog");
        }
    }

    Ok(())
}
