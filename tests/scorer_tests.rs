mod common;

use common::{abc_freqs, layout, three_key_geom};
use keyevolve::frequency::FrequencyTable;
use keyevolve::geometry::{Key, KeyboardGeometry};
use keyevolve::scorer::{score, score_details};
use rstest::rstest;

#[test]
fn test_reference_example() {
    let geom = three_key_geom();
    assert_eq!(score(&layout("abc"), &geom, &abc_freqs()), -14.5);
}

#[rstest]
#[case("abc", -14.5)]
#[case("cba", -14.5)] // Mirror image: pinkies swap, home row unchanged
#[case("bac", 3.0)] // Heaviest char on the home row
#[case("cab", 3.0)]
#[case("acb", -28.5)] // Lightest char on the home row
#[case("bca", -28.5)]
fn test_three_key_permutations(#[case] l: &str, #[case] expected: f64) {
    let geom = three_key_geom();
    assert_eq!(score(&layout(l), &geom, &abc_freqs()), expected, "layout {}", l);
}

#[rstest]
#[case(0, 1, -5.0)] // Home-row pinky: bonus and penalty both apply
#[case(9, 1, -5.0)]
#[case(4, 1, 15.0)] // Home row only
#[case(0, 2, -20.0)] // Pinky only
#[case(3, 0, 0.0)] // Neither
fn test_single_key_terms(#[case] finger: u8, #[case] y: i32, #[case] expected: f64) {
    let geom = KeyboardGeometry::new(vec![Key::new(0, y, finger, 0)]);
    let freqs = FrequencyTable::from_pairs([('a', 10.0)]);
    assert_eq!(score(&['a'], &geom, &freqs), expected);
}

#[test]
fn test_hand_and_x_do_not_matter() {
    let freqs = FrequencyTable::from_pairs([('a', 10.0)]);
    let left = KeyboardGeometry::new(vec![Key::new(0, 1, 4, 0)]);
    let right = KeyboardGeometry::new(vec![Key::new(7, 1, 4, 1)]);
    assert_eq!(score(&['a'], &left, &freqs), score(&['a'], &right, &freqs));
}

#[test]
fn test_unknown_characters_weigh_nothing() {
    let geom = three_key_geom();
    assert_eq!(score(&layout("xyz"), &geom, &abc_freqs()), 0.0);
}

#[test]
fn test_scoring_is_deterministic() {
    let geom = KeyboardGeometry::standard();
    let freqs = FrequencyTable::english();
    let l = layout("qwertyuiopasdfghjkl;zxcvbnm,./");

    let a = score(&l, &geom, &freqs);
    let b = score(&l, &geom, &freqs);
    assert_eq!(a.to_bits(), b.to_bits(), "Scores drifted!");
    assert_eq!(score_details(&l, &geom, &freqs).total.to_bits(), a.to_bits());
}

#[test]
fn test_geometry_edit_changes_future_scores() {
    let mut geom = three_key_geom();
    let freqs = abc_freqs();
    let before = score(&layout("abc"), &geom, &freqs);

    // Move key0 off the pinky: 'a' no longer pays 20.
    geom.key_mut(0).unwrap().finger = 1;
    let after = score(&layout("abc"), &geom, &freqs);

    assert_eq!(after - before, 20.0);
}
