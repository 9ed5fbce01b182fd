//! Helpers that rescale a nominal annual rate to the period a formula works in.
//!
//! None of these validate their arguments. A zero frequency gives an infinite
//! per-period rate, and frequencies above 365 are scaled linearly like any other.

/// Length of the year used to derive a daily rate from a nominal annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBasis {
    /// 365-day year.
    #[default]
    Days365,
    /// 360-day (banker's) year.
    Days360,
}

impl DayBasis {
    pub fn days_per_year(self) -> f64 {
        match self {
            DayBasis::Days365 => 365.0,
            DayBasis::Days360 => 360.0,
        }
    }
}

/// Rescale a nominal annual rate and a term in years to a payment frequency.
///
/// # Formula
/// ```text
/// i' = i / freq
/// n' = n · freq
/// ```
///
/// # Example
/// ```rust
/// # use rstvm::prelude::scale;
/// let (monthly_rate, months) = scale(0.06, 5.0, 12.0);
/// assert_eq!(monthly_rate, 0.005);
/// assert_eq!(months, 60.0);
/// ```
pub fn scale(rate: f64, n: f64, freq: f64) -> (f64, f64) {
    log::trace!("scaling rate {rate} over {n} years to frequency {freq}");
    (rate / freq, n * freq)
}

/// Daily rate `i / D` for the given day basis.
pub fn daily_rate(rate: f64, basis: DayBasis) -> f64 {
    rate / basis.days_per_year()
}

/// One-day growth factor `1 + i / D`.
pub fn daily_growth_factor(rate: f64, basis: DayBasis) -> f64 {
    1.0 + daily_rate(rate, basis)
}

/// Convert a nominal rate compounded `freq` times a year to the effective annual rate.
///
/// # Formula
/// ```text
/// i = (1 + i⁽ᵐ⁾/m)^m - 1
/// ```
///
/// # Example
/// ```rust
/// # use rstvm::prelude::effective_annual_rate;
/// let eff = effective_annual_rate(0.06, 2.0); // semi-annual nominal 6%
/// assert!((eff - 0.0609).abs() < 1e-12);
/// ```
pub fn effective_annual_rate(rate: f64, freq: f64) -> f64 {
    (1.0 + rate / freq).powf(freq) - 1.0
}
