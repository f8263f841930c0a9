use serde::{Deserialize, Serialize};

/// Characters in key order: `layout[i]` sits on `geometry.keys[i]`.
pub type Layout = Vec<char>;

/// The candidate layouts evolved together during one generation.
pub type Population = Vec<Layout>;

/// What the worker publishes once per completed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// 1-based index of the generation within its run.
    pub generation: usize,
    pub best_fitness: f64,
    pub best_layout: Layout,
    pub log_line: String,
}

impl GenerationRecord {
    pub fn new(generation: usize, best_layout: Layout, best_fitness: f64) -> Self {
        let log_line = format!(
            "Generation {}: Best Fitness = {:.6}",
            generation, best_fitness
        );
        Self {
            generation,
            best_fitness,
            best_layout,
            log_line,
        }
    }
}

pub fn layout_to_string(layout: &[char]) -> String {
    layout.iter().collect()
}
