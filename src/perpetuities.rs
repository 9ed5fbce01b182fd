//! Present values of level cash flows that never stop.
//!
//! [`perpetuity_pv`] is the `n → ∞` limit of [`annuity_pv`](crate::annuities_certain::annuity_pv).
//! [`pv_perpetuity_between_cf`] values the same stream from a date that falls
//! part-way between two yearly payments, compounding daily on a 365-day year.

use crate::TvmResult;
use crate::params::ensure_valid_rate;
use crate::rate_convention::{DayBasis, daily_growth_factor};
use bon::builder;

/// Present value of a unit perpetuity-immediate, `1 / i`.
#[builder]
pub fn unit_perpetuity_pv(i: f64) -> TvmResult<f64> {
    ensure_valid_rate("unit_perpetuity_pv", i)?;
    Ok(1.0 / i)
}

/// Present value of a perpetuity-immediate paying `cf` per period.
///
/// # Formula
/// ```text
/// PV = CF / i
/// ```
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let consol = perpetuity_pv().cf(100.0).i(0.05).call()?;
/// assert_eq!(consol, 2000.0);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn perpetuity_pv(cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("perpetuity_pv", i)?;
    Ok(cf / i)
}

/// Present value of a yearly perpetuity whose next payment is `days` days away.
///
/// # Formula
/// ```text
/// PV = CF · (1 + i/365)^(365 - d) / ((1 + i/365)^365 - 1)
/// ```
///
/// `days` is not checked against the year length: values beyond 365 extrapolate
/// the formula rather than fail.
///
/// # Parameters
/// - `days`: Days from the valuation date to the next payment
/// - `cf`: Yearly cash flow
/// - `i`: Nominal annual interest rate, compounded daily
#[builder]
pub fn pv_perpetuity_between_cf(days: f64, cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("pv_perpetuity_between_cf", i)?;
    let basis = DayBasis::Days365;
    let year = basis.days_per_year();
    let growth = daily_growth_factor(i, basis);

    let remaining = growth.powf(year - days);
    let yearly_interest = growth.powf(year) - 1.0;
    Ok(cf * (remaining / yearly_interest))
}
