//! Present value of yearly cash flows when the valuation date falls between two payments.
//!
//! The first payment is `days` days away and is discounted by daily compounding
//! over that stub. The remaining stream is valued with a yearly factor built from
//! the same daily rate.
//!
//! Both the numerator and denominator of the yearly factor are written as
//! `1 / x^k - 1`, which is negative for positive rates; their ratio equals
//! `(1 - vⁿ) / (1 - v)` with `v = x^(-D)`, i.e. `n` payments at `days`,
//! `days + D`, and so on. The terms are evaluated in that literal form.

use crate::TvmResult;
use crate::params::ensure_valid_rate;
use crate::rate_convention::{DayBasis, daily_growth_factor};
use bon::builder;

/// Present value of `n` yearly payments of `cf`, the first `days` days from now.
///
/// # Formula
/// ```text
/// x   = 1 + i/D
/// PV  = CF / x^d · (1 / x^(n·D) - 1) / (1 / x^D - 1)
/// ```
///
/// # Parameters
/// - `days`: Days from the valuation date to the first payment
/// - `n`: Number of yearly payments
/// - `cf`: Yearly cash flow
/// - `i`: Nominal annual interest rate, compounded daily
/// - `basis`: Day-count year (default 365 days)
#[builder]
pub fn pv_between_cf(
    days: f64,
    n: f64,
    cf: f64,
    i: f64,
    #[builder(default)] basis: DayBasis,
) -> TvmResult<f64> {
    ensure_valid_rate("pv_between_cf", i)?;
    Ok(stub_discounted_pv(days, n, cf, i, basis))
}

/// [`pv_between_cf`] on a 365-day year.
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let pv = pv_between_cf_365().days(90.0).n(5.0).cf(1000.0).i(0.05).call()?;
/// println!("PV CF In Between 365 Rule: {pv:.2}");
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn pv_between_cf_365(days: f64, n: f64, cf: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("pv_between_cf_365", i)?;
    Ok(stub_discounted_pv(days, n, cf, i, DayBasis::Days365))
}

// ================================================
// PRIVATE FUNCTIONS
// ================================================

fn stub_discounted_pv(days: f64, n: f64, cf: f64, i: f64, basis: DayBasis) -> f64 {
    let year = basis.days_per_year();
    let growth = daily_growth_factor(i, basis);

    let first = cf / growth.powf(days);
    let second = 1.0 / growth.powf(n * year) - 1.0;
    let third = 1.0 / growth.powf(year) - 1.0;
    first * second / third
}
