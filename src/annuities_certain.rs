use crate::TvmResult;
use crate::params::ensure_valid_rate;
use crate::rate_convention::scale;
use bon::builder;

// ==================Unit annuities==================

/// Present value of a unit annuity-certain immediate (in arrears).
///
/// $1 paid at the end of each of `n` periods, discounted at `i` per period.
///
/// # Formula
/// ```text
/// aₙ = (1 - (1 + i)⁻ⁿ) / i
/// ```
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let annuity = unit_annuity_pv().n(10.0).i(0.06).call()?;
/// assert!((annuity - 7.3601).abs() < 1e-4);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn unit_annuity_pv(n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("unit_annuity_pv", i)?;
    Ok((1.0 - (1.0 + i).powf(-n)) / i)
}

/// Accumulated value of a unit annuity-certain immediate at the end of `n` periods.
///
/// # Formula
/// ```text
/// sₙ = ((1 + i)ⁿ - 1) / i
/// ```
#[builder]
pub fn unit_annuity_fv(n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("unit_annuity_fv", i)?;
    Ok(((1.0 + i).powf(n) - 1.0) / i)
}

/// Present value of a unit annuity-certain due (in advance).
///
/// Payments fall at the start of each period, so the value equals the
/// immediate annuity grown by one period.
///
/// # Formula
/// ```text
/// äₙ = (1 - (1 + i)⁻ⁿ) / (1 - (1 + i)⁻¹)
/// ```
#[builder]
pub fn unit_annuity_due_pv(n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("unit_annuity_due_pv", i)?;
    let growth = 1.0 + i;
    Ok((1.0 - growth.powf(-n)) / (1.0 - growth.powf(-1.0)))
}

/// Accumulated value of a unit annuity-certain due at the end of `n` periods.
///
/// # Formula
/// ```text
/// s̈ₙ = ((1 + i)ⁿ - 1) / (1 - (1 + i)⁻¹)
/// ```
#[builder]
pub fn unit_annuity_due_fv(n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("unit_annuity_due_fv", i)?;
    let growth = 1.0 + i;
    Ok((growth.powf(n) - 1.0) / (1.0 - growth.powf(-1.0)))
}

// ==================Level cash flow==================

/// Present value of an annuity-immediate paying `cf` per period.
///
/// # Parameters
/// - `cf`: Cash flow paid each period
/// - `n`: Number of periods
/// - `i`: Interest rate per period
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let pv = annuity_pv().cf(2000.0).n(10.0).i(0.06).call()?;
/// assert!((pv - 14720.17).abs() < 0.01);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn annuity_pv(cf: f64, n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("annuity_pv", i)?;
    Ok(cf * unit_annuity_pv().n(n).i(i).call()?)
}

/// Accumulated value of an annuity-immediate paying `cf` per period.
#[builder]
pub fn annuity_fv(cf: f64, n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("annuity_fv", i)?;
    Ok(cf * unit_annuity_fv().n(n).i(i).call()?)
}

/// Present value of an annuity-due paying `cf` at the start of each period.
#[builder]
pub fn annuity_due_pv(cf: f64, n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("annuity_due_pv", i)?;
    Ok(cf * unit_annuity_due_pv().n(n).i(i).call()?)
}

/// Accumulated value of an annuity-due paying `cf` at the start of each period.
#[builder]
pub fn annuity_due_fv(cf: f64, n: f64, i: f64) -> TvmResult<f64> {
    ensure_valid_rate("annuity_due_fv", i)?;
    Ok(cf * unit_annuity_due_fv().n(n).i(i).call()?)
}

// ==================Payment frequency==================

/// Present value of an annuity-immediate paid `freq` times a year for `n` years.
///
/// The nominal annual rate and the term are rescaled to the payment period and
/// fed to [`annuity_pv`]. Use `cf = 1` for the unit annuity.
///
/// # Formula
/// ```text
/// PV = CF · (1 - (1 + i/m)^(-n·m)) / (i/m)
/// ```
///
/// # Parameters
/// - `cf`: Cash flow per payment
/// - `freq`: Payments per year (default 1)
/// - `n`: Term in years
/// - `i`: Nominal annual interest rate
///
/// # Example
/// ```rust
/// # use rstvm::prelude::*;
/// let monthly = annuity_freq_pv().cf(1000.0).freq(12.0).n(5.0).i(0.06).call()?;
/// let direct = annuity_pv().cf(1000.0).n(60.0).i(0.005).call()?;
/// assert_eq!(monthly, direct);
/// # TvmResult::Ok(())
/// ```
#[builder]
pub fn annuity_freq_pv(
    cf: f64,
    #[builder(default = 1.0)] freq: f64,
    n: f64,
    i: f64,
) -> TvmResult<f64> {
    ensure_valid_rate("annuity_freq_pv", i)?;
    let (i, n) = scale(i, n, freq);
    annuity_pv().cf(cf).n(n).i(i).call()
}

/// Accumulated value of an annuity-immediate paid `freq` times a year for `n` years.
///
/// # Formula
/// ```text
/// FV = CF · ((1 + i/m)^(n·m) - 1) / (i/m)
/// ```
#[builder]
pub fn annuity_freq_fv(
    cf: f64,
    #[builder(default = 1.0)] freq: f64,
    n: f64,
    i: f64,
) -> TvmResult<f64> {
    ensure_valid_rate("annuity_freq_fv", i)?;
    let (i, n) = scale(i, n, freq);
    annuity_fv().cf(cf).n(n).i(i).call()
}

/// Present value of an annuity-due paid `freq` times a year for `n` years.
///
/// # Formula
/// ```text
/// PV = CF · (1 - (1 + i/m)^(-n·m)) / (1 - (1 + i/m)⁻¹)
/// ```
#[builder]
pub fn annuity_due_freq_pv(
    cf: f64,
    #[builder(default = 1.0)] freq: f64,
    n: f64,
    i: f64,
) -> TvmResult<f64> {
    ensure_valid_rate("annuity_due_freq_pv", i)?;
    let (i, n) = scale(i, n, freq);
    annuity_due_pv().cf(cf).n(n).i(i).call()
}

/// Accumulated value of an annuity-due paid `freq` times a year for `n` years.
///
/// # Formula
/// ```text
/// FV = CF · ((1 + i/m)^(n·m) - 1) / (1 - (1 + i/m)⁻¹)
/// ```
#[builder]
pub fn annuity_due_freq_fv(
    cf: f64,
    #[builder(default = 1.0)] freq: f64,
    n: f64,
    i: f64,
) -> TvmResult<f64> {
    ensure_valid_rate("annuity_due_freq_fv", i)?;
    let (i, n) = scale(i, n, freq);
    annuity_due_fv().cf(cf).n(n).i(i).call()
}
