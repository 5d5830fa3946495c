use std::process::exit;

use clap::Parser;
use log::info;

use tableau_lp::algorithm::OptimizationResult;
use tableau_lp::algorithm::two_phase::settings::{SolverSettings, SolverSettingsBuilder};
use tableau_lp::control::discretization::{DEFAULT_DISTANCE, DEFAULT_DURATION, Discretization, Profile};

/// Exit code for invalid command line input.
const INPUT_ERROR: i32 = 64;

/// Minimize the total absolute acceleration needed to travel a distance in a given time.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// Number of time intervals, at least 2
    factor: usize,
    /// Length of the time horizon
    #[arg(long, default_value_t = DEFAULT_DURATION)]
    duration: f64,
    /// Position at the end of the time horizon
    #[arg(long, default_value_t = DEFAULT_DISTANCE, allow_negative_numbers = true)]
    distance: f64,
    /// Maximum number of pivots in each phase of the simplex method
    #[arg(long)]
    max_iterations: Option<usize>,
    /// Values with at most this magnitude are considered zero
    #[arg(long)]
    epsilon: Option<f64>,
    /// Log the progress of the solver
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let opts: Opts = Opts::parse();

    let default_filter = if opts.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let discretization = match Discretization::new(opts.factor, opts.duration, opts.distance) {
        Ok(discretization) => discretization,
        Err(error) => {
            eprintln!("{}", error);
            exit(INPUT_ERROR);
        },
    };
    let settings = match settings(&opts) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("{}", error);
            exit(INPUT_ERROR);
        },
    };

    info!("Solving with {} intervals of length {}", discretization.factor(), discretization.step());
    let result = match discretization.solve(&settings) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("{}", error);
            exit(INPUT_ERROR);
        },
    };

    match result {
        OptimizationResult::FiniteOptimum(solution) => {
            print!("{}", Profile::from_solution(&discretization, &solution));
        },
        other => {
            let status = other.status();
            eprintln!("{}", status);
            exit(status.code());
        },
    }
}

/// Solver settings from the command line, with defaults for what wasn't given.
fn settings(opts: &Opts) -> Result<SolverSettings, String> {
    let mut builder = SolverSettingsBuilder::default();
    if let Some(epsilon) = opts.epsilon {
        builder.epsilon(epsilon);
    }
    if let Some(max_iterations) = opts.max_iterations {
        builder.max_iterations(max_iterations);
    }

    builder.build().map_err(|error| error.to_string())
}
