#![allow(dead_code)]

use keyevolve::config::SearchParams;
use keyevolve::frequency::FrequencyTable;
use keyevolve::geometry::{Key, KeyboardGeometry};
use keyevolve::optimizer::OptimizationController;

/// key0 left pinky, key1 home row (right index), key2 right pinky.
pub fn three_key_geom() -> KeyboardGeometry {
    KeyboardGeometry::new(vec![
        Key::new(0, 0, 0, 0),
        Key::new(1, 1, 5, 1),
        Key::new(2, 0, 9, 1),
    ])
}

pub fn abc_freqs() -> FrequencyTable {
    FrequencyTable::from_pairs([('a', 10.0), ('b', 5.0), ('c', 1.0)])
}

pub fn layout(s: &str) -> Vec<char> {
    s.chars().collect()
}

pub fn sorted(chars: &[char]) -> Vec<char> {
    let mut v = chars.to_vec();
    v.sort();
    v
}

/// Params for the built-in 30-key board with no pause between generations.
pub fn quick_params(population_size: usize, generations: usize) -> SearchParams {
    SearchParams {
        population_size,
        generations,
        generation_delay_ms: 0,
        ..Default::default()
    }
}

pub fn controller(seed: u64) -> OptimizationController {
    OptimizationController::with_seed(
        KeyboardGeometry::standard(),
        FrequencyTable::english(),
        seed,
    )
}
