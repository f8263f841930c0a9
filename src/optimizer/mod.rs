pub mod controller;
pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;
pub mod selection;

// Re-export specific structs for easier access
pub use self::controller::{OptimizationController, RunState, StartOutcome, StopOutcome};
pub use self::runner::{Optimizer, ProgressCallback, RunOutcome, Silent};
