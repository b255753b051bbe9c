use std::env;
use std::error::Error;
use std::fs::File;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tsp_tabu::io::{load_settings, read_instance, Summary, Trial};
use tsp_tabu::tabu::TabuRunner;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".into());
    let settings = load_settings(&config_path)?;
    let instance = read_instance(&settings.data_file)?;
    info!(
        "loaded {} with {} cities",
        settings.data_file.display(),
        instance.matrix.size()
    );

    let repeats = settings.repeats.max(1);
    let mut trials = Vec::with_capacity(repeats);
    for run in 0..repeats {
        let started = Instant::now();
        let result = TabuRunner::solve(&instance.matrix, &settings.solver);
        let elapsed = started.elapsed();
        info!(
            "run {}: best cost {} after {} rounds ({:?}, {:.1} ms)",
            run,
            result.best_cost,
            result.iterations,
            result.termination,
            elapsed.as_secs_f64() * 1e3
        );
        trials.push(Trial {
            cost: result.best_cost,
            tour: result.best_tour,
            elapsed,
        });
    }

    let summary = Summary::new(
        settings.data_file.to_string_lossy(),
        trials,
        instance.known_optimum(),
    );
    print!("{summary}");

    if let Some(path) = &settings.output_file {
        summary.write_tsv(File::create(path)?)?;
        info!("results written to {}", path.display());
    }

    Ok(())
}
