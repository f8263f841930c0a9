use crate::core_types::{GenerationRecord, Layout};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const LOG_CAPACITY: usize = 50;

/// A consistent copy of the published state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Runs started on this store, counting the current one.
    pub run: usize,
    /// Last generation published by the current (or last) run.
    pub generation: usize,
    pub best_layout: Layout,
    pub best_fitness: f64,
    /// One entry per published generation, across all runs.
    pub fitness_history: Vec<f64>,
    /// Newest last; at most [`LOG_CAPACITY`] lines.
    pub logs: VecDeque<String>,
}

/// State shared between the search worker (sole writer) and any number of
/// readers. Everything sits behind one lock so a snapshot always reflects a
/// single generation. The lock is only held to copy data in or out.
///
/// History and logs accumulate across runs; only `clear()` empties them.
#[derive(Debug, Default)]
pub struct ResultStore {
    inner: Mutex<Snapshot>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks the start of a new run and returns its number.
    pub fn begin_run(&self) -> usize {
        let mut state = self.lock();
        state.run += 1;
        state.generation = 0;
        state.run
    }

    pub fn publish(&self, record: &GenerationRecord) {
        let mut state = self.lock();
        state.generation = record.generation;
        state.best_layout.clone_from(&record.best_layout);
        state.best_fitness = record.best_fitness;
        state.fitness_history.push(record.best_fitness);

        state.logs.push_back(record.log_line.clone());
        while state.logs.len() > LOG_CAPACITY {
            state.logs.pop_front();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }

    /// Drops history, logs and the published best. The run counter is kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        let run = state.run;
        *state = Snapshot {
            run,
            ..Snapshot::default()
        };
    }
}
