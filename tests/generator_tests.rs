//! Synthetic data generator tests.

mod common;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regress_playground::core::{GenerationOptions, OptionsError};
use regress_playground::generate::{generate, GenerationError, SyntheticGenerator};

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_fixed_seed_is_bit_for_bit_reproducible() {
    let opts = common::options(1000, 42, &[2.0, 1.5], 5.0, 100.0);

    let a = generate(&opts).expect("generation should succeed");
    let b = generate(&opts).expect("generation should succeed");

    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.records().zip(b.records()) {
        assert_eq!(ra.response.to_bits(), rb.response.to_bits());
        for (fa, fb) in ra.features.iter().zip(&rb.features) {
            assert_eq!(fa.to_bits(), fb.to_bits());
        }
    }
}

#[test]
fn test_generation_has_no_hidden_state() {
    let opts = common::options(200, 7, &[1.0], 0.0, 4.0);
    let generator = SyntheticGenerator::new(opts.clone()).expect("valid options");

    let first = generator.generate().expect("generation should succeed");
    // An unrelated generation in between must not influence the next one.
    let _ = generate(&common::options(50, 99, &[3.0], 1.0, 1.0));
    let second = generator.generate().expect("generation should succeed");

    assert_eq!(first.feature_column(0), second.feature_column(0));
}

#[test]
fn test_caller_supplied_rng_advances() {
    let generator =
        SyntheticGenerator::new(common::options(20, 0, &[1.0], 0.0, 1.0)).expect("valid options");
    let mut rng = StdRng::seed_from_u64(123);

    let a = generator.generate_with_rng(&mut rng).expect("generation should succeed");
    let b = generator.generate_with_rng(&mut rng).expect("generation should succeed");

    assert_ne!(a.feature_column(0), b.feature_column(0));
}

// ============================================================================
// Response construction
// ============================================================================

#[test]
fn test_noise_free_responses_follow_the_line() {
    let samples = generate(&common::options(100, 3, &[2.0, 1.5], 5.0, 0.0))
        .expect("generation should succeed");

    for rec in samples.records() {
        let expected = 2.0 * rec.features[0] + 1.5 * rec.features[1] + 5.0;
        assert_relative_eq!(rec.response, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_noise_variance_is_respected() {
    let samples = generate(&common::options(1000, 11, &[0.0], 0.0, 9.0))
        .expect("generation should succeed");

    let n = samples.len() as f64;
    let mean = samples.response().iter().sum::<f64>() / n;
    let var = samples
        .response()
        .iter()
        .map(|&y| (y - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    assert!(mean.abs() < 0.5, "noise mean should be near zero, got {mean}");
    assert!((var - 9.0).abs() < 1.5, "noise variance should be near 9, got {var}");
}

#[test]
fn test_features_stay_in_range() {
    let opts = GenerationOptions::builder()
        .n_samples(500)
        .coefficients([1.0, 1.0])
        .feature_range(-10.0, 10.0)
        .build()
        .expect("valid options");
    let summary = generate(&opts).expect("generation should succeed").summary();

    for &(lo, hi) in &summary.feature_ranges {
        assert!(lo >= -10.0 && hi < 10.0);
    }
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn test_bounce_rate_preset_is_clamped() {
    let samples =
        generate(&GenerationOptions::bounce_rate()).expect("generation should succeed");
    let summary = samples.summary();

    assert_eq!(samples.len(), 200);
    assert!(summary.feature_ranges[0].0 >= 1.0 && summary.feature_ranges[0].1 < 8.0);
    assert!(summary.response_range.0 >= 0.05);
    assert!(summary.response_range.1 <= 0.9);
}

#[test]
fn test_clamp_truncates_instead_of_resampling() {
    // Every noiseless response is 0.1 + 0.12 * x with x in [7, 8): above 0.9
    // for most records, so they must land exactly on the upper bound.
    let opts = GenerationOptions::builder()
        .coefficients([0.12])
        .intercept(0.1)
        .noise_variance(0.0)
        .feature_range(7.0, 8.0)
        .clamp(0.05, 0.9)
        .build()
        .expect("valid options");
    let samples = generate(&opts).expect("generation should succeed");

    for rec in samples.records() {
        let raw = 0.1 + 0.12 * rec.features[0];
        if raw > 0.9 {
            assert_eq!(rec.response, 0.9);
        } else {
            assert_relative_eq!(rec.response, raw, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_clamp_does_not_change_draws() {
    let base = GenerationOptions::bounce_rate();
    let unclamped = GenerationOptions {
        clamp: None,
        ..base.clone()
    };

    let a = generate(&base).expect("generation should succeed");
    let b = generate(&unclamped).expect("generation should succeed");

    assert_eq!(a.feature_column(0), b.feature_column(0));
    for i in 0..a.len() {
        assert_eq!(a.response()[i], b.response()[i].clamp(0.05, 0.9));
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_single_record() {
    let samples = generate(&common::options(1, 5, &[2.0], 1.0, 1.0))
        .expect("generation should succeed");
    assert_eq!(samples.len(), 1);
    assert!(samples.record(0).is_some());
}

#[test]
fn test_invalid_options_are_rejected() {
    let opts = GenerationOptions::builder()
        .feature_range(3.0, 3.0)
        .build_unchecked();

    assert!(matches!(
        SyntheticGenerator::new(opts.clone()),
        Err(OptionsError::InvalidFeatureRange { .. })
    ));
    assert!(matches!(
        generate(&opts),
        Err(GenerationError::InvalidOptions(_))
    ));
}
