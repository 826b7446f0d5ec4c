//! Random draw and rounding helpers shared by the production and demand models.

use rand::Rng;

/// Draw uniformly from `[low, high)`.
///
/// Computed as `low + (high - low) * u` so that a degenerate range returns
/// `low` and an inverted range samples `(high, low]` instead of panicking.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.gen::<f64>()
}

/// Round a power value to two decimal places
pub fn round_mw(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let v = uniform(&mut rng, 0.8, 1.0);
            assert!((0.8..1.0).contains(&v));
        }
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(uniform(&mut rng, 0.5, 0.5), 0.5);
    }

    #[test]
    fn test_uniform_inverted_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = uniform(&mut rng, 1.0, 0.7);
            assert!(v > 0.7 && v <= 1.0);
        }
    }

    #[test]
    fn test_round_mw() {
        assert_eq!(round_mw(1234.5678), 1234.57);
        assert_eq!(round_mw(0.004), 0.0);
        assert_eq!(round_mw(14500.0), 14500.0);
    }
}
