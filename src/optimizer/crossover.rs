use crate::core_types::Layout;

/// Order-preserving one-point crossover.
///
/// The child keeps the first half of `p1` (rounded down) in place, then takes
/// the characters of `p2` in order, skipping any already present, until it is
/// as long as `p1`. Two permutations of one alphabet always yield a third.
pub fn crossover(p1: &[char], p2: &[char]) -> Layout {
    let len = p1.len();
    let split = len / 2;

    let mut child = Vec::with_capacity(len);
    child.extend_from_slice(&p1[..split]);

    for &gene in p2 {
        if child.len() >= len {
            break;
        }
        if !child.contains(&gene) {
            child.push(gene);
        }
    }

    child
}
