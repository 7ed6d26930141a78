//! Randomized property tests for the descriptive statistics.
//!
//! Sequences are drawn from a seeded generator so failures reproduce.

use mathkit_stats::{
    descriptive::{self, Statistic},
    summary::Summary,
};
use rand::{Rng, SeedableRng as _, seq::SliceRandom};
use rand_pcg::Pcg32;

const SEED: u64 = 0x5eed_cafe;
const ITERATIONS: usize = 500;
const MAX_LEN: usize = 64;
const TOLERANCE: f64 = 1e-9;

fn random_values(rng: &mut impl Rng, min_len: usize) -> Vec<f64> {
    let len = rng.random_range(min_len..=MAX_LEN);
    (0..len).map(|_| rng.random_range(-1000.0..1000.0)).collect()
}

fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

#[test]
#[expect(clippy::cast_precision_loss)]
fn test_average_is_sum_over_count() {
    let mut rng = Pcg32::seed_from_u64(SEED);
    for _ in 0..ITERATIONS {
        let values = random_values(&mut rng, 1);
        let expected = descriptive::sum(&values) / values.len() as f64;
        assert_close(descriptive::average(&values).unwrap(), expected);
    }
}

#[test]
fn test_every_value_within_extrema() {
    let mut rng = Pcg32::seed_from_u64(SEED);
    for _ in 0..ITERATIONS {
        let values = random_values(&mut rng, 1);
        let min = descriptive::minimum(&values).unwrap();
        let max = descriptive::maximum(&values).unwrap();
        assert!(values.iter().all(|v| min <= *v && *v <= max));
        assert!(values.contains(&min));
        assert!(values.contains(&max));
    }
}

#[test]
fn test_standard_deviation_is_root_of_variance() {
    let mut rng = Pcg32::seed_from_u64(SEED);
    for _ in 0..ITERATIONS {
        let values = random_values(&mut rng, 2);
        let variance = descriptive::variance(&values).unwrap();
        let std_dev = descriptive::standard_deviation(&values).unwrap();
        assert!(variance >= 0.0);
        assert!(std_dev >= 0.0);
        assert_eq!(std_dev, variance.sqrt());
    }
}

#[test]
fn test_statistics_are_order_invariant() {
    let mut rng = Pcg32::seed_from_u64(SEED);
    for _ in 0..ITERATIONS {
        let values = random_values(&mut rng, 2);
        let mut shuffled = values.clone();
        shuffled.shuffle(&mut rng);

        for statistic in Statistic::ALL {
            let expected = statistic.compute(&values).unwrap();
            let actual = statistic.compute(&shuffled).unwrap();
            match statistic {
                Statistic::Maximum | Statistic::Minimum => assert_eq!(actual, expected),
                _ => assert_close(actual, expected),
            }
        }
    }
}

#[test]
fn test_inputs_are_not_modified() {
    let mut rng = Pcg32::seed_from_u64(SEED);
    let values = random_values(&mut rng, 2);
    let before = values.clone();
    let _ = Summary::new(&values).unwrap();
    for statistic in Statistic::ALL {
        let _ = statistic.compute(&values).unwrap();
    }
    assert_eq!(values, before);
}

#[test]
fn test_size_preconditions() {
    for statistic in [Statistic::Average, Statistic::Maximum, Statistic::Minimum] {
        let err = statistic.compute(&[]).unwrap_err();
        assert_eq!(err.statistic(), statistic);
    }
    for statistic in [Statistic::Variance, Statistic::StandardDeviation] {
        let err = statistic.compute(&[1.0]).unwrap_err();
        assert_eq!(err.statistic(), statistic);
    }
    assert_eq!(Statistic::Sum.compute(&[]).unwrap(), 0.0);
}
