use fastrand::Rng;

/// Single pass of positional swaps.
///
/// Each position is picked with probability `rate` and swapped with a
/// uniformly chosen position (possibly itself). Swaps are applied in order,
/// so a later swap may move a character an earlier one placed.
pub fn mutate(layout: &mut [char], rate: f64, rng: &mut Rng) {
    let len = layout.len();
    for i in 0..len {
        if rng.f64() < rate {
            let j = rng.usize(0..len);
            layout.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = Rng::with_seed(42);
        let original: Vec<char> = "abcdefghij".chars().collect();
        let mut layout = original.clone();
        for _ in 0..100 {
            mutate(&mut layout, 0.0, &mut rng);
        }
        assert_eq!(layout, original);
    }

    #[test]
    fn test_full_rate_keeps_permutation() {
        let mut rng = Rng::with_seed(42);
        let original: Vec<char> = "abcdefghij".chars().collect();
        let mut layout = original.clone();
        mutate(&mut layout, 1.0, &mut rng);

        let mut sorted = layout.clone();
        sorted.sort();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_empty_layout() {
        let mut rng = Rng::with_seed(1);
        let mut layout: Vec<char> = Vec::new();
        mutate(&mut layout, 1.0, &mut rng);
        assert!(layout.is_empty());
    }
}
