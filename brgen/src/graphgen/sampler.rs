//! Inverse-CDF sampling of one index from a weight vector.

use rand::Rng;

/// Running sum of `weights`.
pub fn cumsum(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |acc, &w| {
            *acc += w;
            Some(*acc)
        })
        .collect()
}

/// Smallest index with `cdf[idx] > u`.
///
/// Rounding can leave the last cumulative entry slightly below one; a draw past every entry
/// resolves to the last index.
pub fn search(cdf: &[f64], u: f64) -> usize {
    let idx = cdf.partition_point(|&c| c <= u);
    idx.min(cdf.len().saturating_sub(1))
}

/// Draws `u ~ U[0, 1)` from `rng` and maps it through the cumulative distribution.
///
/// Returns the drawn value alongside the chosen index.
pub fn sample<R: Rng + ?Sized>(cdf: &[f64], rng: &mut R) -> (f64, usize) {
    let u: f64 = rng.gen();
    (u, search(cdf, u))
}

#[cfg(test)]
mod sampler_test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn cumsum_is_monotonic() {
        let cdf = cumsum(&[0.25, 0.0, 0.5, 0.25]);
        assert_eq!(cdf, vec![0.25, 0.25, 0.75, 1.0]);
    }

    #[test]
    fn strict_inequality_picks_next_bucket() {
        let cdf = [0.25, 0.25, 0.75, 1.0];
        assert_eq!(search(&cdf, 0.0), 0);
        assert_eq!(search(&cdf, 0.2499), 0);
        // cdf[idx] == u is not enough, and the empty bucket is skipped
        assert_eq!(search(&cdf, 0.25), 2);
        assert_eq!(search(&cdf, 0.9), 3);
    }

    #[test]
    fn overrun_clamps_to_last_index() {
        let cdf = [0.3, 0.6, 0.9999999999];
        assert_eq!(search(&cdf, 0.99999999995), 2);
        assert_eq!(search(&cdf, 2.0), 2);
        assert_eq!(search(&[0.5], 0.7), 0);
        assert_eq!(search(&[], 0.7), 0);
    }

    #[test]
    fn empirical_frequencies_follow_weights() {
        let cdf = cumsum(&[0.1, 0.6, 0.3]);
        let rng = &mut StdRng::seed_from_u64(42);
        let mut counts = [0usize; 3];
        let draws = 100_000;
        for _ in 0..draws {
            counts[sample(&cdf, rng).1] += 1;
        }
        for (count, expected) in counts.iter().zip([0.1, 0.6, 0.3]) {
            let freq = *count as f64 / draws as f64;
            assert!((freq - expected).abs() < 0.01, "{counts:?}");
        }
    }
}
