//! Weighted random selection of reward trees.
//!
//! Each candidate is chosen with probability `weight / total`. The draw is a single
//! uniform sample in `[0, total)` followed by a cumulative walk in catalog order.

use rand::Rng;

use crate::domain::errors::SelectionError;
use crate::domain::models::Weighted;

/// Stateless weighted picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedTreeSelector;

impl WeightedTreeSelector {
    pub const fn new() -> Self {
        Self
    }

    /// Pick one candidate with probability proportional to its weight.
    ///
    /// Candidates are walked in the given order and the first whose running sum reaches
    /// the draw wins. A non-positive total (every weight zero) lands on the last
    /// candidate instead of failing.
    ///
    /// # Errors
    /// [`SelectionError::InvalidArgument`] when `candidates` is empty.
    pub fn select<'a, T, R>(&self, candidates: &'a [T], rng: &mut R) -> Result<&'a T, SelectionError>
    where
        T: Weighted,
        R: Rng + ?Sized,
    {
        let Some(last) = candidates.last() else {
            return Err(SelectionError::InvalidArgument(
                "cannot select a reward from an empty catalog".to_string(),
            ));
        };

        let total: f64 = candidates.iter().map(Weighted::weight).sum();
        if !total.is_finite() || total <= 0.0 {
            return Ok(last);
        }

        let draw = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        for candidate in candidates {
            cumulative += candidate.weight();
            if cumulative >= draw {
                return Ok(candidate);
            }
        }

        // Rounding can leave the final sum a hair below the draw.
        Ok(last)
    }

    /// [`select`](Self::select) using the thread-local generator.
    pub fn select_random<'a, T: Weighted>(&self, candidates: &'a [T]) -> Result<&'a T, SelectionError> {
        self.select(candidates, &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::RewardCandidate;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn candidate(name: &str, weight: Option<f64>) -> RewardCandidate {
        RewardCandidate::new(name, "Bosque", "", "", weight)
    }

    #[test]
    fn test_empty_catalog_is_invalid_argument() {
        let selector = WeightedTreeSelector::new();
        let empty: Vec<RewardCandidate> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = selector.select(&empty, &mut rng).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_candidate_always_selected() {
        let selector = WeightedTreeSelector::new();
        let mut rng = StdRng::seed_from_u64(7);
        for weight in [Some(0.0), Some(0.001), None, Some(1e9)] {
            let only = vec![candidate("Secuoya", weight)];
            for _ in 0..100 {
                assert_eq!(selector.select(&only, &mut rng).unwrap().name, "Secuoya");
            }
        }
    }

    #[test]
    fn test_all_zero_weights_pick_last() {
        let selector = WeightedTreeSelector::new();
        let candidates = vec![
            candidate("Roble", Some(0.0)),
            candidate("Pino", Some(0.0)),
            candidate("Arce", Some(0.0)),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(selector.select(&candidates, &mut rng).unwrap().name, "Arce");
        }
    }

    #[test]
    fn test_zero_weight_candidate_never_chosen_after_first() {
        let selector = WeightedTreeSelector::new();
        let candidates = vec![candidate("Roble", Some(10.0)), candidate("Pino", Some(0.0))];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            assert_eq!(selector.select(&candidates, &mut rng).unwrap().name, "Roble");
        }
    }

    #[test]
    fn test_returns_reference_into_catalog() {
        let selector = WeightedTreeSelector::new();
        let candidates = vec![candidate("Roble", None), candidate("Pino", None)];
        let mut rng = StdRng::seed_from_u64(5);
        let chosen = selector.select(&candidates, &mut rng).unwrap();
        assert!(candidates.iter().any(|c| std::ptr::eq(c, chosen)));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let selector = WeightedTreeSelector::new();
        let candidates = vec![
            candidate("Roble", Some(1.0)),
            candidate("Pino", Some(2.0)),
            candidate("Cerezo", Some(3.0)),
        ];
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert_eq!(
                selector.select(&candidates, &mut a).unwrap().name,
                selector.select(&candidates, &mut b).unwrap().name
            );
        }
    }

    #[test]
    fn test_missing_weights_share_evenly() {
        let selector = WeightedTreeSelector::new();
        let candidates = vec![candidate("Roble", None), candidate("Pino", Some(20.0))];
        let mut rng = StdRng::seed_from_u64(99);
        let draws = 100_000;
        let robles = (0..draws)
            .filter(|_| selector.select(&candidates, &mut rng).unwrap().name == "Roble")
            .count();
        let share = robles as f64 / f64::from(draws);
        assert!((share - 0.5).abs() < 0.01, "share was {share}");
    }

    #[test]
    fn test_select_random_uses_thread_rng() {
        let selector = WeightedTreeSelector::new();
        let candidates = vec![candidate("Roble", None)];
        assert_eq!(selector.select_random(&candidates).unwrap().name, "Roble");
    }

    fn pino_roble() -> Vec<RewardCandidate> {
        vec![candidate("Pino", Some(50.0)), candidate("Roble", Some(50.0))]
    }

    fn share_of(name: &str, picks: &[&str]) -> f64 {
        picks.iter().filter(|p| **p == name).count() as f64 / picks.len() as f64
    }

    #[test]
    fn test_even_pair_splits_evenly_over_ten_thousand_draws() {
        let selector = WeightedTreeSelector::new();
        let candidates = pino_roble();
        // Evenly spaced draws across the whole generator range.
        let mut rng = StepRng::new(0, u64::MAX / 10_000 + 1);

        let picks: Vec<&str> = (0..10_000)
            .map(|_| selector.select(&candidates, &mut rng).unwrap().name.as_str())
            .collect();
        for name in ["Pino", "Roble"] {
            let share = share_of(name, &picks);
            assert!((0.49..=0.51).contains(&share), "{name} share was {share}");
        }
    }

    #[test]
    fn test_even_pair_splits_evenly_across_seeds() {
        let selector = WeightedTreeSelector::new();
        let candidates = pino_roble();
        let mut picks: Vec<&str> = Vec::with_capacity(100_000);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            picks.extend(
                (0..10_000).map(|_| selector.select(&candidates, &mut rng).unwrap().name.as_str()),
            );
        }
        for name in ["Pino", "Roble"] {
            let share = share_of(name, &picks);
            assert!((0.49..=0.51).contains(&share), "{name} share was {share}");
        }
    }
}
