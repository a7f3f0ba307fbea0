use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use air_cargo::pddl::scenario;
use air_cargo::{AirCargoProblem, SearchProblem};

/// Ground an air cargo problem and report its size and initial heuristics.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Built-in scenario: small, medium or large
    #[arg(default_value = "small")]
    scenario: String,

    /// Load the problem from a TOML scenario file instead
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let problem = match &args.file {
        Some(path) => AirCargoProblem::from_file(path),
        None => scenario::by_name(&args.scenario),
    };
    let problem = match problem {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("{}", problem);
    println!("State map: {} fluents", problem.state_map().len());
    let ground = problem.ground_actions();
    let count = |relation: &str| ground.iter().filter(|a| a.name.relation() == relation).count();
    println!("Ground actions: {} (load {}, unload {}, fly {})",
        ground.len(), count("Load"), count("Unload"), count("Fly"));

    let initial = problem.initial_state();
    println!("Initial state: {}", initial);
    println!("Applicable actions:");
    for action in problem.actions(initial) {
        println!("\t{}", action.name);
    }
    println!("h_1: {}", problem.h_1(initial));
    println!("h_ignore_preconditions: {}", problem.h_ignore_preconditions(initial));
    match problem.h_pg_levelsum(initial) {
        Ok(sum) => println!("h_pg_levelsum: {}", sum),
        Err(e) => println!("h_pg_levelsum: {}", e),
    }
}
