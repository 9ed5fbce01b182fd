//! Relationships that hold across the valuation families.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstvm::prelude::*;
use std::thread;

const RATES: [f64; 6] = [0.005, 0.03, 0.06, 0.1, 0.25, -0.02];
const TERMS: [f64; 6] = [1.0, 4.0, 10.0, 20.5, 40.0, 7.0];

#[test]
fn test_pv_fv_duality_across_grid() {
    for rate in RATES {
        for term in TERMS {
            let pv = unit_annuity_pv().n(term).i(rate).call().unwrap();
            let fv = unit_annuity_fv().n(term).i(rate).call().unwrap();
            assert_relative_eq!(pv * (1.0 + rate).powf(term), fv, max_relative = 1e-11);
        }
    }
}

#[test]
fn test_frequency_adjustment_is_substitution() {
    let freqs = [1.0, 2.0, 4.0, 12.0, 52.0, 365.0, 1000.0];
    for freq in freqs {
        let (i, n) = scale(0.06, 5.0, freq);
        assert_eq!(
            annuity_freq_pv().cf(1000.0).freq(freq).n(5.0).i(0.06).call().unwrap(),
            annuity_pv().cf(1000.0).n(n).i(i).call().unwrap()
        );
        assert_eq!(
            annuity_freq_fv().cf(1000.0).freq(freq).n(5.0).i(0.06).call().unwrap(),
            annuity_fv().cf(1000.0).n(n).i(i).call().unwrap()
        );
        assert_eq!(
            annuity_due_freq_pv().cf(1000.0).freq(freq).n(5.0).i(0.06).call().unwrap(),
            annuity_due_pv().cf(1000.0).n(n).i(i).call().unwrap()
        );
        assert_eq!(
            annuity_due_freq_fv().cf(1000.0).freq(freq).n(5.0).i(0.06).call().unwrap(),
            annuity_due_fv().cf(1000.0).n(n).i(i).call().unwrap()
        );
    }
}

#[test]
fn test_default_frequency_is_annual() {
    assert_eq!(
        annuity_freq_pv().cf(300.0).n(6.0).i(0.04).call().unwrap(),
        annuity_pv().cf(300.0).n(6.0).i(0.04).call().unwrap()
    );
}

#[test]
fn test_perpetuity_limit() {
    let perpetuity = perpetuity_pv().cf(100.0).i(0.05).call().unwrap();
    let annuity = annuity_pv().cf(100.0).n(10_000.0).i(0.05).call().unwrap();
    assert_eq!(perpetuity, 2000.0);
    assert_abs_diff_eq!(annuity, perpetuity, epsilon = 1e-3);
}

#[test]
fn test_every_valuator_rejects_zero_rate() {
    let results = [
        unit_annuity_pv().n(10.0).i(0.0).call(),
        unit_annuity_fv().n(10.0).i(0.0).call(),
        unit_annuity_due_pv().n(10.0).i(0.0).call(),
        unit_annuity_due_fv().n(10.0).i(0.0).call(),
        annuity_pv().cf(1.0).n(10.0).i(0.0).call(),
        annuity_fv().cf(1.0).n(10.0).i(0.0).call(),
        annuity_due_pv().cf(1.0).n(10.0).i(0.0).call(),
        annuity_due_fv().cf(1.0).n(10.0).i(0.0).call(),
        annuity_freq_pv().cf(1.0).freq(12.0).n(10.0).i(0.0).call(),
        annuity_freq_fv().cf(1.0).freq(12.0).n(10.0).i(0.0).call(),
        annuity_due_freq_pv().cf(1.0).freq(12.0).n(10.0).i(0.0).call(),
        annuity_due_freq_fv().cf(1.0).freq(12.0).n(10.0).i(0.0).call(),
        unit_perpetuity_pv().i(0.0).call(),
        perpetuity_pv().cf(1.0).i(0.0).call(),
        pv_perpetuity_between_cf().days(10.0).cf(1.0).i(0.0).call(),
        day_count_pv().n(10.0).cf(1.0).i(0.0).call(),
        daily_basis_pv().n(10.0).cf(1.0).i(0.0).call(),
        daily_360_pv().n(10.0).cf(1.0).i(0.0).call(),
        annual_pv().n(10.0).cf(1.0).i(0.0).call(),
        annual_continuous_pv().n(10.0).cf(1.0).i(0.0).call(),
        pv_between_cf().days(10.0).n(10.0).cf(1.0).i(0.0).call(),
        pv_between_cf_365().days(10.0).n(10.0).cf(1.0).i(0.0).call(),
    ];
    for result in results {
        assert!(matches!(result, Err(TvmError::InvalidRate { .. })));
    }
}

#[test]
fn test_unvalidated_inputs_flow_through() {
    // Negative terms turn discounting into growth
    let pv = unit_annuity_pv().n(-3.0).i(0.05).call().unwrap();
    assert!(pv < 0.0);

    // Negative cash flows scale linearly
    let pv = annuity_pv().cf(-100.0).n(5.0).i(0.05).call().unwrap();
    let unit = unit_annuity_pv().n(5.0).i(0.05).call().unwrap();
    assert_eq!(pv, -100.0 * unit);

    // Negative stub days grow the first payment
    let pv = pv_between_cf_365().days(-10.0).n(1.0).cf(100.0).i(0.05).call().unwrap();
    assert!(pv > 100.0);
}

#[test]
fn test_concurrent_calls_are_deterministic() {
    let expected = daily_basis_pv().n(10.0).cf(2000.0).i(0.06).call().unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| daily_basis_pv().n(10.0).cf(2000.0).i(0.06).call().unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
