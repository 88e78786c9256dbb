//! Property-based tests for formula invariants.
//!
//! These tests verify properties that must hold for every valid input:
//! - K_IRB is zero for zero RWA and for non-positive EAD
//! - Regimes are mutually exclusive and match the K/A/D ordering
//! - Risk weights never fall below the 15 floor
//! - K_SSA stays within [0, 1.5]
//! - The calibrated parameter never falls below 0.3

use proptest::prelude::*;
use secirba_formula::prelude::*;

/// Generates `(A, D)` with `0 <= A < D <= 1`.
fn tranche_points() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..0.99).prop_flat_map(|a| (Just(a), (a + 0.001)..=1.0f64))
}

fn exposure_type() -> impl Strategy<Value = ExposureType> {
    prop_oneof![Just(ExposureType::Retail), Just(ExposureType::NonRetail)]
}

fn seniority() -> impl Strategy<Value = Seniority> {
    prop_oneof![Just(Seniority::Senior), Just(Seniority::NonSenior)]
}

proptest! {
    #[test]
    fn prop_zero_rwa_gives_zero_kirb(ead in 1e-6f64..1e9) {
        prop_assert_eq!(compute_kirb(0.0, ead), 0.0);
    }

    #[test]
    fn prop_non_positive_ead_gives_zero_kirb(rwa in 0.0f64..1e9, ead in -1e9f64..=0.0) {
        prop_assert_eq!(compute_kirb(rwa, ead), 0.0);
    }

    #[test]
    fn prop_regimes_partition((a, d) in tranche_points(), k in 0.0f64..1.5) {
        let regime = classify(k, a, d);
        prop_assert_eq!(regime == TrancheRegime::AboveCapital, k <= a);
        prop_assert_eq!(regime == TrancheRegime::WithinCapital, k >= d);
        prop_assert_eq!(regime == TrancheRegime::Straddling, a < k && k < d);
    }

    #[test]
    fn prop_risk_weight_floor(
        (a, d) in tranche_points(),
        k in 0.0f64..1.0,
        kssa in 0.0f64..=1.5,
    ) {
        let rw = classify_and_weight(k, kssa, a, d);
        prop_assert!(rw.risk_weight_percent >= RISK_WEIGHT_FLOOR);
    }

    #[test]
    fn prop_kssa_bounded(
        (a, d) in tranche_points(),
        k in 1e-6f64..1.0,
        p in 1e-4f64..5.0,
    ) {
        let kssa = compute_kssa(k, a, d, p).unwrap();
        prop_assert!((0.0..=KSSA_CAP).contains(&kssa));
    }

    #[test]
    fn prop_kssa_is_deterministic(
        (a, d) in tranche_points(),
        k in 1e-6f64..1.0,
        p in 1e-4f64..5.0,
    ) {
        let first = compute_kssa(k, a, d, p).unwrap();
        let second = compute_kssa(k, a, d, p).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn prop_non_positive_kirb_is_domain_error(
        (a, d) in tranche_points(),
        k in -1.0f64..=0.0,
        p in 0.01f64..5.0,
    ) {
        prop_assert!(compute_kssa(k, a, d, p).unwrap_err().is_domain());
    }

    #[test]
    fn prop_calibrated_p_respects_floor(
        exposure in exposure_type(),
        seniority in seniority(),
        n in 1.0f64..500.0,
        lgd in 0.0f64..=1.0,
        k in 0.0f64..1.0,
        m in 1u32..=5,
    ) {
        let p = calibrate_p(exposure, seniority, n, lgd, k, m).unwrap();
        prop_assert!(p >= P_FLOOR);
    }

    #[test]
    fn prop_derived_classification_always_supported(
        exposure in exposure_type(),
        seniority in seniority(),
        n in 1.0f64..500.0,
    ) {
        let key = Classification::derive(exposure, seniority, n).key();
        prop_assert!(SupervisoryParameterTable::lookup(key).is_ok());
    }
}

#[test]
fn test_degenerate_interval_returns_exactly_one() {
    // u = D - K = 0.25 and l = max(A, K) = 0.25, all values exact in binary.
    for p in [0.3, 0.5, 1.0, 2.0] {
        assert_eq!(compute_kssa(0.25, 0.125, 0.5, p).unwrap(), 1.0);
    }
}
