use crate::reports;
use clap::Args;
use keyevolve::config::SearchParams;
use keyevolve::core_types::layout_to_string;
use keyevolve::error::KeResult;
use keyevolve::frequency::FrequencyTable;
use keyevolve::geometry::KeyboardGeometry;
use keyevolve::optimizer::OptimizationController;
use keyevolve::scorer;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    /// JSON parameter file; replaces the search flags above
    #[arg(long)]
    pub params_file: Option<String>,

    /// Stop the search after this many seconds
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// How often progress is read back from the engine
    #[arg(long, default_value_t = 250)]
    pub poll_ms: u64,
}

pub fn run(
    args: SearchArgs,
    geometry: KeyboardGeometry,
    frequencies: FrequencyTable,
) -> KeResult<()> {
    let params = match &args.params_file {
        Some(path) => {
            info!("📂 Loading Parameters: {}", path);
            SearchParams::load_from_file(path)?
        }
        None => args.params,
    };

    let controller = OptimizationController::new(geometry, frequencies, fastrand::Rng::new());

    info!(
        "🧬 Evolving {} layouts over {} generations",
        params.population_size, params.generations
    );
    controller.start(params)?;

    let max_duration = args.time.map(Duration::from_secs);
    let poll = Duration::from_millis(args.poll_ms.max(1));
    let start_time = Instant::now();
    let mut last_generation = 0;

    while controller.is_running() {
        if let Some(limit) = max_duration {
            if start_time.elapsed() >= limit {
                info!("⏱️  Time limit reached.");
                controller.stop();
                break;
            }
        }

        // Copy out, then release the store before logging.
        let snap = controller.snapshot();
        if snap.generation != last_generation {
            last_generation = snap.generation;
            if let Some(line) = snap.logs.back() {
                info!("{}", line);
            }
        }

        thread::sleep(poll);
    }

    let snap = controller.snapshot();
    info!("\n=== 🏆 FINAL RESULT ({}) ===", controller.state());
    info!("Generations: {}", snap.generation);
    info!("Fitness: {:.4}", snap.best_fitness);
    info!("Layout: {}", layout_to_string(&snap.best_layout));

    if !snap.best_layout.is_empty() {
        let geometry = controller.geometry();
        let details = scorer::score_details(&snap.best_layout, &geometry, controller.frequencies());
        reports::print_layout_grid("OPTIMIZED", &snap.best_layout, &geometry);
        reports::print_score_details(&details);
        reports::print_history_summary(&snap.fitness_history);
    }

    Ok(())
}
