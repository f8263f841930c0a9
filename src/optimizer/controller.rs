use crate::config::SearchParams;
use crate::core_types::GenerationRecord;
use crate::error::{KeResult, KeyEvolveError};
use crate::frequency::FrequencyTable;
use crate::geometry::KeyboardGeometry;
use crate::optimizer::runner::{Optimizer, ProgressCallback, RunOutcome};
use crate::store::{ResultStore, Snapshot};
use fastrand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use strum_macros::{Display, EnumIter};
use tracing::{error, info, warn};

/// Lifecycle of the controller.
///
/// `Completed` and `Stopped` record how the last run ended. They are resting
/// states: like `Idle`, they accept `start()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A run is already active; nothing was spawned.
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// An active worker was cancelled and joined.
    Stopped,
    /// No worker was active.
    NotRunning,
}

struct ActiveRun {
    running: Arc<AtomicBool>,
    handle: JoinHandle<RunOutcome>,
}

struct Lifecycle {
    state: RunState,
    active: Option<ActiveRun>,
}

struct StorePublisher {
    store: Arc<ResultStore>,
}

impl ProgressCallback for StorePublisher {
    fn on_generation(&self, record: &GenerationRecord) -> bool {
        self.store.publish(record);
        true
    }
}

/// Owns the background search. At most one worker exists at a time; it is
/// the only writer of the [`ResultStore`].
pub struct OptimizationController {
    geometry: RwLock<Arc<KeyboardGeometry>>,
    frequencies: Arc<FrequencyTable>,
    store: Arc<ResultStore>,
    rng: Mutex<Rng>,
    lifecycle: Mutex<Lifecycle>,
    workers_spawned: AtomicUsize,
}

impl OptimizationController {
    /// Runs draw their randomness from `rng` (forked once per run unless
    /// the run's params carry a seed).
    pub fn new(geometry: KeyboardGeometry, frequencies: FrequencyTable, rng: Rng) -> Self {
        Self {
            geometry: RwLock::new(Arc::new(geometry)),
            frequencies: Arc::new(frequencies),
            store: Arc::new(ResultStore::new()),
            rng: Mutex::new(rng),
            lifecycle: Mutex::new(Lifecycle {
                state: RunState::Idle,
                active: None,
            }),
            workers_spawned: AtomicUsize::new(0),
        }
    }

    pub fn with_seed(geometry: KeyboardGeometry, frequencies: FrequencyTable, seed: u64) -> Self {
        Self::new(geometry, frequencies, Rng::with_seed(seed))
    }

    fn lock_lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validates `params`, then spawns one worker and returns at once.
    ///
    /// Invalid configuration is returned as an error and nothing is spawned.
    /// While a run is active this does nothing and reports `AlreadyRunning`.
    pub fn start(&self, params: SearchParams) -> KeResult<StartOutcome> {
        let mut life = self.lock_lifecycle();
        Self::reap(&mut life);

        if life.state == RunState::Running {
            warn!("Search already running; start request ignored.");
            return Ok(StartOutcome::AlreadyRunning);
        }

        let rng = match params.seed {
            Some(seed) => Rng::with_seed(seed),
            None => self.rng.lock().unwrap_or_else(PoisonError::into_inner).fork(),
        };

        let mut optimizer = Optimizer::new(self.geometry(), self.frequencies.clone(), params, rng)?;

        let run = self.store.begin_run();
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();
        let publisher = StorePublisher {
            store: self.store.clone(),
        };

        let handle = thread::Builder::new()
            .name(format!("keyevolve-run-{}", run))
            .spawn(move || {
                let p = optimizer.params();
                info!(
                    "Run {} started: population {}, {} generations, mutation rate {}",
                    run, p.population_size, p.generations, p.mutation_rate
                );

                let outcome = optimizer.run(&flag, &publisher);
                flag.store(false, Ordering::Release);

                info!(
                    "Run {} {:?} after {} generations.",
                    run,
                    outcome,
                    optimizer.generation()
                );
                outcome
            })?;

        self.workers_spawned.fetch_add(1, Ordering::SeqCst);
        life.state = RunState::Running;
        life.active = Some(ActiveRun { running, handle });

        Ok(StartOutcome::Started)
    }

    /// Cancels the active run and blocks until its worker has exited.
    ///
    /// The worker notices the request before its next generation, so this
    /// waits at most one generation plus the configured delay.
    pub fn stop(&self) -> StopOutcome {
        let mut life = self.lock_lifecycle();

        let Some(active) = life.active.take() else {
            return StopOutcome::NotRunning;
        };

        if active.handle.is_finished() {
            life.state = Self::join(active);
            return StopOutcome::NotRunning;
        }

        info!("Stopping search...");
        active.running.store(false, Ordering::Release);
        life.state = Self::join(active);

        StopOutcome::Stopped
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn state(&self) -> RunState {
        let mut life = self.lock_lifecycle();
        Self::reap(&mut life);
        life.state
    }

    /// Blocks until the active run (if any) has ended, polling every `poll`.
    pub fn wait(&self, poll: Duration) -> RunState {
        loop {
            let state = self.state();
            if state != RunState::Running {
                return state;
            }
            thread::sleep(poll);
        }
    }

    fn reap(life: &mut Lifecycle) {
        if life.active.as_ref().is_some_and(|a| a.handle.is_finished()) {
            if let Some(active) = life.active.take() {
                life.state = Self::join(active);
            }
        }
    }

    fn join(active: ActiveRun) -> RunState {
        match active.handle.join() {
            Ok(RunOutcome::Completed) => RunState::Completed,
            Ok(RunOutcome::Stopped) => RunState::Stopped,
            Err(_) => {
                error!("Search worker panicked.");
                RunState::Stopped
            }
        }
    }

    /// Number of workers spawned over the controller's lifetime.
    pub fn workers_spawned(&self) -> usize {
        self.workers_spawned.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> Arc<ResultStore> {
        self.store.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn geometry(&self) -> Arc<KeyboardGeometry> {
        self.geometry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies an edit to the keyboard geometry. Refused with
    /// `GeometryLocked` while a run is active.
    pub fn edit_geometry<R>(&self, edit: impl FnOnce(&mut KeyboardGeometry) -> R) -> KeResult<R> {
        let mut life = self.lock_lifecycle();
        Self::reap(&mut life);

        if life.state == RunState::Running {
            return Err(KeyEvolveError::GeometryLocked);
        }

        let mut guard = self.geometry.write().unwrap_or_else(PoisonError::into_inner);
        Ok(edit(Arc::make_mut(&mut guard)))
    }
}

impl Drop for OptimizationController {
    fn drop(&mut self) {
        self.stop();
    }
}
