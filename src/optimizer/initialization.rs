use crate::core_types::{Layout, Population};
use fastrand::Rng;

/// A uniformly random permutation of `alphabet` (Fisher-Yates).
pub fn random_layout(alphabet: &[char], rng: &mut Rng) -> Layout {
    let mut layout = alphabet.to_vec();
    rng.shuffle(&mut layout);
    layout
}

pub fn initialize_population(size: usize, alphabet: &[char], rng: &mut Rng) -> Population {
    (0..size).map(|_| random_layout(alphabet, rng)).collect()
}
