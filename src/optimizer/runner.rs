use crate::config::SearchParams;
use crate::core_types::{GenerationRecord, Population};
use crate::error::KeResult;
use crate::frequency::FrequencyTable;
use crate::geometry::KeyboardGeometry;
use crate::optimizer::{crossover, initialization, mutation, selection};
use crate::scorer;
use fastrand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// Every configured generation was evolved.
    Completed,
    /// The running flag was cleared or the callback asked to abort.
    Stopped,
}

/// Receives each finished generation. Returning `false` aborts the run.
pub trait ProgressCallback: Send + Sync {
    fn on_generation(&self, record: &GenerationRecord) -> bool;
}

/// Runs without reporting anywhere.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_generation(&self, _record: &GenerationRecord) -> bool {
        true
    }
}

/// One genetic search: owns the population and the run's RNG.
pub struct Optimizer {
    geometry: Arc<KeyboardGeometry>,
    frequencies: Arc<FrequencyTable>,
    params: SearchParams,
    population: Population,
    generation: usize,
    rng: Rng,
}

impl Optimizer {
    /// Validates `params` against the geometry and seeds a fresh population.
    pub fn new(
        geometry: Arc<KeyboardGeometry>,
        frequencies: Arc<FrequencyTable>,
        params: SearchParams,
        mut rng: Rng,
    ) -> KeResult<Self> {
        params.validate(geometry.key_count())?;

        let alphabet = params.alphabet_chars();
        let population =
            initialization::initialize_population(params.population_size, &alphabet, &mut rng);

        Ok(Self {
            geometry,
            frequencies,
            params,
            population,
            generation: 0,
            rng,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Generations evolved so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Score, select the top half, refill by crossover + mutation, then
    /// report the best layout of the rebuilt population.
    ///
    /// The reported best is not an all-time maximum: it may be lower than an
    /// earlier generation's.
    pub fn evolve_generation(&mut self) -> GenerationRecord {
        let size = self.params.population_size;

        let scores: Vec<f64> = self
            .population
            .iter()
            .map(|layout| scorer::score(layout, &self.geometry, &self.frequencies))
            .collect();

        let selected = selection::select(&self.population, &scores, size / 2);

        let mut next: Population = Vec::with_capacity(size);
        next.extend(selected.iter().cloned());

        while next.len() < size {
            let p1 = &selected[self.rng.usize(0..selected.len())];
            let p2 = &selected[self.rng.usize(0..selected.len())];
            let mut child = crossover::crossover(p1, p2);
            mutation::mutate(&mut child, self.params.mutation_rate, &mut self.rng);
            next.push(child);
        }

        self.population = next;
        self.generation += 1;

        let (best_layout, best_fitness) =
            selection::find_best(&self.population, &self.geometry, &self.frequencies)
                .unwrap_or_default();

        GenerationRecord::new(self.generation, best_layout, best_fitness)
    }

    /// Evolves until the configured generation count is reached, `running`
    /// is cleared, or the callback aborts. `running` is checked before every
    /// generation; the configured delay follows each one.
    pub fn run<CB: ProgressCallback>(&mut self, running: &AtomicBool, callback: &CB) -> RunOutcome {
        let delay = self.params.generation_delay();

        while self.generation < self.params.generations {
            if !running.load(Ordering::Acquire) {
                return RunOutcome::Stopped;
            }

            let record = self.evolve_generation();
            debug!(
                "Gen {:5} | Best: {:.4}",
                record.generation, record.best_fitness
            );

            if !callback.on_generation(&record) {
                return RunOutcome::Stopped;
            }

            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }

        RunOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<GenerationRecord>>);

    impl ProgressCallback for Recorder {
        fn on_generation(&self, record: &GenerationRecord) -> bool {
            self.0.lock().unwrap().push(record.clone());
            true
        }
    }

    struct AbortAfter(usize);

    impl ProgressCallback for AbortAfter {
        fn on_generation(&self, record: &GenerationRecord) -> bool {
            record.generation < self.0
        }
    }

    fn params(population_size: usize, generations: usize) -> SearchParams {
        SearchParams {
            population_size,
            generations,
            generation_delay_ms: 0,
            ..Default::default()
        }
    }

    fn optimizer(p: SearchParams, seed: u64) -> Optimizer {
        Optimizer::new(
            Arc::new(KeyboardGeometry::standard()),
            Arc::new(FrequencyTable::english()),
            p,
            Rng::with_seed(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_population_size_is_restored_each_generation() {
        let mut opt = optimizer(params(7, 3), 1);
        for _ in 0..3 {
            opt.evolve_generation();
            assert_eq!(opt.population().len(), 7);
        }
    }

    #[test]
    fn test_elites_survive() {
        let mut opt = optimizer(params(10, 1), 2);
        let geom = KeyboardGeometry::standard();
        let freqs = FrequencyTable::english();
        let (best_before, fitness_before) =
            selection::find_best(opt.population(), &geom, &freqs).unwrap();

        let record = opt.evolve_generation();
        assert!(opt.population().contains(&best_before));
        assert!(record.best_fitness >= fitness_before);
    }

    #[test]
    fn test_run_reports_every_generation() {
        let mut opt = optimizer(params(4, 5), 3);
        let recorder = Recorder(Mutex::new(Vec::new()));
        let running = AtomicBool::new(true);

        let outcome = opt.run(&running, &recorder);

        assert_eq!(outcome, RunOutcome::Completed);
        let records = recorder.0.lock().unwrap();
        let gens: Vec<usize> = records.iter().map(|r| r.generation).collect();
        assert_eq!(gens, vec![1, 2, 3, 4, 5]);
        assert_eq!(opt.generation(), 5);
    }

    #[test]
    fn test_cleared_flag_stops_before_first_generation() {
        let mut opt = optimizer(params(4, 5), 4);
        let running = AtomicBool::new(false);
        assert_eq!(opt.run(&running, &Silent), RunOutcome::Stopped);
        assert_eq!(opt.generation(), 0);
    }

    #[test]
    fn test_callback_can_abort() {
        let mut opt = optimizer(params(4, 50), 5);
        let running = AtomicBool::new(true);
        assert_eq!(opt.run(&running, &AbortAfter(3)), RunOutcome::Stopped);
        assert_eq!(opt.generation(), 3);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let res = Optimizer::new(
            Arc::new(KeyboardGeometry::standard()),
            Arc::new(FrequencyTable::english()),
            params(1, 5),
            Rng::with_seed(0),
        );
        assert!(res.is_err());
    }
}
