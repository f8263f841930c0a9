use crate::core_types::{Layout, Population};
use crate::frequency::FrequencyTable;
use crate::geometry::KeyboardGeometry;
use crate::scorer;
use std::cmp::Ordering;

/// Truncation selection: the `k` highest-scoring layouts, best first.
///
/// Equal scores are ordered by the layouts themselves, compared
/// lexicographically and taken in descending order, so the result never
/// depends on the input order. `scores[i]` belongs to `population[i]`.
pub fn select(population: &[Layout], scores: &[f64], k: usize) -> Population {
    let mut ranked: Vec<(f64, &Layout)> = scores.iter().copied().zip(population).collect();

    ranked.sort_by(|a, b| rank_descending(a, b));

    ranked
        .into_iter()
        .take(k)
        .map(|(_, layout)| layout.clone())
        .collect()
}

fn rank_descending(a: &(f64, &Layout), b: &(f64, &Layout)) -> Ordering {
    b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1))
}

/// Highest-scoring layout; the first one wins a tie. `None` for an empty
/// population.
pub fn find_best(
    population: &[Layout],
    geometry: &KeyboardGeometry,
    frequencies: &FrequencyTable,
) -> Option<(Layout, f64)> {
    let mut best: Option<(&Layout, f64)> = None;

    for layout in population {
        let fitness = scorer::score(layout, geometry, frequencies);
        match best {
            Some((_, best_fitness)) if fitness <= best_fitness => {}
            _ => best = Some((layout, fitness)),
        }
    }

    best.map(|(layout, fitness)| (layout.clone(), fitness))
}
