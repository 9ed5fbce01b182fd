//! Present value of level yearly cash flows under daily compounding.
//!
//! The yearly discount factor is built from a daily rate on a 365- or 360-day
//! year, then summed as a geometric series.
//!
//! The series is raised to `n + 1`, not `n`. With `v` the yearly discount factor
//! the result is `CF · (v + v² + … + vⁿ)`, i.e. `n` payments at the end of each
//! year, expressed through `(v - vⁿ⁺¹) / (1 - v)`. The exponent is kept exactly as
//! written so that results stay reproducible.

use crate::TvmResult;
use crate::params::ensure_valid_rate;
use crate::rate_convention::{DayBasis, daily_growth_factor};
use bon::builder;

/// Present value of `n` yearly payments of `cf`, discounted daily on the given day basis.
///
/// # Formula
/// ```text
/// v   = (1 + i/D)^(-D)
/// PV  = CF · (v - v^(n+1)) / (1 - v)
/// ```
///
/// # Parameters
/// - `n`: Number of years
/// - `cf`: Yearly cash flow
/// - `i`: Nominal annual interest rate
/// - `basis`: Day-count year (default 365 days)
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let pv_365 = day_count_pv().n(10.0).cf(2000.0).i(0.06).call()?;
/// let pv_360 = day_count_pv().n(10.0).cf(2000.0).i(0.06).basis(DayBasis::Days360).call()?;
/// assert!(pv_360 > pv_365);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn day_count_pv(
    n: f64,
    cf: f64,
    i: f64,
    #[builder(default)] basis: DayBasis,
) -> TvmResult<f64> {
    ensure_valid_rate("day_count_pv", i)?;
    Ok(geometric_daily_pv(n, cf, i, basis))
}

/// [`day_count_pv`] on a 365-day year.
#[builder]
pub fn daily_basis_pv(n: f64, cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("daily_basis_pv", i)?;
    Ok(geometric_daily_pv(n, cf, i, DayBasis::Days365))
}

/// [`day_count_pv`] on a 360-day year.
#[builder]
pub fn daily_360_pv(n: f64, cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("daily_360_pv", i)?;
    Ok(geometric_daily_pv(n, cf, i, DayBasis::Days360))
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn geometric_daily_pv(n: f64, cf: f64, i: f64, basis: DayBasis) -> f64 {
    let year = basis.days_per_year();
    let base = daily_growth_factor(i, basis).powf(-year);
    let base_n = base.powf(n + 1.0);

    let upper = cf * (base - base_n);
    let lower = 1.0 - base;
    upper / lower
}
