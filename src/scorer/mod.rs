pub mod types;

pub use self::types::ScoreDetails;
use crate::core_types::Layout;
use crate::error::{KeResult, KeyEvolveError};
use crate::frequency::FrequencyTable;
use crate::geometry::KeyboardGeometry;
use std::collections::HashSet;

/// Subtracted per unit of frequency on a pinky key.
pub const PINKY_PENALTY: f64 = 2.0;
/// Added per unit of frequency on the home row.
pub const HOME_ROW_BONUS: f64 = 1.5;

/// Fitness of a layout. Higher is better.
///
/// Each character contributes `-freq * 2` when its key is under a pinky
/// (finger 0 or 9) and `+freq * 1.5` when its key is on the home row. Both
/// terms apply to a home-row pinky key.
///
/// The caller guarantees `layout.len() <= geometry.key_count()`; the
/// controller enforces this when a run is configured.
#[inline]
pub fn score(layout: &[char], geometry: &KeyboardGeometry, frequencies: &FrequencyTable) -> f64 {
    let mut value = 0.0;
    for (&c, key) in layout.iter().zip(geometry.keys()) {
        let freq = frequencies.weight(c);
        if key.is_pinky() {
            value -= freq * PINKY_PENALTY;
        }
        if key.is_home_row() {
            value += freq * HOME_ROW_BONUS;
        }
    }
    value
}

/// Same arithmetic as [`score`], split into components for reports.
pub fn score_details(
    layout: &[char],
    geometry: &KeyboardGeometry,
    frequencies: &FrequencyTable,
) -> ScoreDetails {
    let mut d = ScoreDetails::default();
    for (&c, key) in layout.iter().zip(geometry.keys()) {
        let freq = frequencies.weight(c);
        d.total_freq += freq;
        if key.is_pinky() {
            d.pinky_freq += freq;
            d.total -= freq * PINKY_PENALTY;
        }
        if key.is_home_row() {
            d.home_row_freq += freq;
            d.total += freq * HOME_ROW_BONUS;
        }
    }
    d.pinky_penalty = d.pinky_freq * PINKY_PENALTY;
    d.home_row_bonus = d.home_row_freq * HOME_ROW_BONUS;
    d
}

/// Parses a layout string, requiring an exact permutation of `alphabet`.
pub fn parse_layout(text: &str, alphabet: &[char]) -> KeResult<Layout> {
    let layout: Layout = text.chars().filter(|c| !c.is_whitespace()).collect();

    if layout.len() != alphabet.len() {
        return Err(KeyEvolveError::Validation(format!(
            "layout has {} characters, expected {}",
            layout.len(),
            alphabet.len()
        )));
    }

    let allowed: HashSet<char> = alphabet.iter().copied().collect();
    let mut seen = HashSet::with_capacity(layout.len());
    for &c in &layout {
        if !allowed.contains(&c) {
            return Err(KeyEvolveError::Validation(format!(
                "'{}' is not part of the alphabet",
                c
            )));
        }
        if !seen.insert(c) {
            return Err(KeyEvolveError::Validation(format!(
                "'{}' appears more than once",
                c
            )));
        }
    }

    Ok(layout)
}
