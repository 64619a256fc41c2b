//! Property tests for weighted tree selection and no-repeat phrase picking.

use forest::domain::errors::SelectionError;
use forest::domain::models::RewardCandidate;
use forest::services::{NoImmediateRepeatPicker, WeightedTreeSelector};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn candidates(weights: &[Option<f64>]) -> Vec<RewardCandidate> {
    weights
        .iter()
        .enumerate()
        .map(|(i, w)| RewardCandidate::new(format!("Árbol {i}"), "Bosque", "", "", *w))
        .collect()
}

fn phrases(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Frase número {i}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: the selected candidate is always one of the inputs
    #[test]
    fn prop_selection_is_member(
        weights in prop::collection::vec(prop::option::of(0.01f64..100.0), 1..12),
        seed in any::<u64>(),
    ) {
        let pool = candidates(&weights);
        let selector = WeightedTreeSelector::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..50 {
            let chosen = selector.select(&pool, &mut rng).unwrap();
            prop_assert!(pool.iter().any(|c| std::ptr::eq(c, chosen)));
        }
    }

    /// Property: observed frequencies converge to weight / total
    #[test]
    fn prop_frequencies_track_weights(
        weights in prop::collection::vec(1.0f64..50.0, 2..5),
        seed in any::<u64>(),
    ) {
        let pool = candidates(&weights.iter().copied().map(Some).collect::<Vec<_>>());
        let total: f64 = weights.iter().sum();
        let selector = WeightedTreeSelector::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let draws = 20_000;

        let mut counts = vec![0usize; pool.len()];
        for _ in 0..draws {
            let chosen = selector.select(&pool, &mut rng).unwrap();
            let idx = pool.iter().position(|c| std::ptr::eq(c, chosen)).unwrap();
            counts[idx] += 1;
        }

        for (count, weight) in counts.iter().zip(&weights) {
            let observed = *count as f64 / f64::from(draws);
            let expected = weight / total;
            prop_assert!(
                (observed - expected).abs() < 0.03,
                "observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    /// Property: the last `min(capacity, pool - 1)` picks never repeat while unseen phrases remain
    #[test]
    fn prop_no_repeat_within_history(
        pool_size in 6usize..15,
        seed in any::<u64>(),
    ) {
        let pool = phrases(pool_size);
        let picker = NoImmediateRepeatPicker::with_capacity(5);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picked: Vec<String> = Vec::new();

        for _ in 0..100 {
            let phrase = picker.pick_with_rng(&pool, &mut rng).unwrap();
            let start = picked.len().saturating_sub(5);
            prop_assert!(!picked[start..].contains(&phrase));
            picked.push(phrase);
            prop_assert!(picker.history().len() <= 5);
        }
    }

    /// Property: picks always come from the pool, whatever its size
    #[test]
    fn prop_pick_is_member(
        pool_size in 1usize..8,
        seed in any::<u64>(),
    ) {
        let pool = phrases(pool_size);
        let picker = NoImmediateRepeatPicker::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..40 {
            let phrase = picker.pick_with_rng(&pool, &mut rng).unwrap();
            prop_assert!(pool.contains(&phrase));
        }
    }
}

#[test]
fn empty_inputs_are_rejected() {
    let selector = WeightedTreeSelector::new();
    let none: Vec<RewardCandidate> = Vec::new();
    assert!(matches!(
        selector.select_random(&none),
        Err(SelectionError::InvalidArgument(_))
    ));

    let picker = NoImmediateRepeatPicker::new();
    assert!(matches!(picker.pick(&[]), Err(SelectionError::NoDataAvailable(_))));
}
