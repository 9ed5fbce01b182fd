use crate::TvmResult;
use crate::params::ensure_valid_rate;
use bon::builder;

/// Present value of `n` yearly payments of `cf` under annual compounding.
///
/// Algebraically the same as [`annuity_pv`](crate::annuities_certain::annuity_pv),
/// but evaluated as `(CF · (1 - (1 + i)⁻ⁿ)) / i`, so the last bits may differ.
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let pv = annual_pv().n(10.0).cf(2000.0).i(0.06).call()?;
/// println!("Annual PV: {pv:.2}"); // 14720.17
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn annual_pv(n: f64, cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("annual_pv", i)?;
    Ok(cf * (1.0 - (1.0 + i).powf(-n)) / i)
}

/// Present value of level yearly payments discounted with continuous compounding.
///
/// # Formula
/// ```text
/// PV = CF · (e^(-i) - e^(-(n+1)·i)) / (1 - e^(-i))
/// ```
///
/// Like the daily day-count forms, the tail term uses `n + 1`, which gives `n`
/// payments at the end of years `1..=n`.
#[builder]
pub fn annual_continuous_pv(n: f64, cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("annual_continuous_pv", i)?;
    let one_year = (-i).exp();
    let tail = (-(n + 1.0) * i).exp();
    Ok((cf * (one_year - tail)) / (1.0 - one_year))
}

// ================================================
// UNIT TESTS
// ================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuities_certain::annuity_pv;
    use crate::error::TvmError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_annual_pv_reference_value() {
        let pv = annual_pv().n(10.0).cf(2000.0).i(0.06).call().unwrap();
        assert_abs_diff_eq!(pv, 14720.17, epsilon = 0.01);
    }

    #[test]
    fn test_annual_pv_agrees_with_annuity() {
        let rates = [0.02, 0.06, 0.15];
        let terms = [3.0, 10.0, 40.0];
        for (rate, term) in rates.iter().zip(terms.iter()) {
            let annual = annual_pv().n(*term).cf(325.0).i(*rate).call().unwrap();
            let annuity = annuity_pv().cf(325.0).n(*term).i(*rate).call().unwrap();
            assert_relative_eq!(annual, annuity, max_relative = 1e-13);
        }
    }

    #[test]
    fn test_continuous_equals_annuity_at_force_of_interest() {
        // e^(-δ) = 1/(1+i) when i = e^δ - 1
        let delta: f64 = 0.05;
        let eff = delta.exp_m1();
        let continuous = annual_continuous_pv().n(12.0).cf(1000.0).i(delta).call().unwrap();
        let annuity = annuity_pv().cf(1000.0).n(12.0).i(eff).call().unwrap();
        assert_relative_eq!(continuous, annuity, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_rate_rejected() {
        assert!(matches!(
            annual_pv().n(10.0).cf(2000.0).i(0.0).call(),
            Err(TvmError::InvalidRate { .. })
        ));
        assert!(matches!(
            annual_continuous_pv().n(10.0).cf(2000.0).i(0.0).call(),
            Err(TvmError::InvalidRate { .. })
        ));
    }
}
