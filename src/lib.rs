//! # RSTVM
//!
//! Closed-form time-value-of-money valuations in Rust: present and future values of
//! annuities, perpetuities and irregularly timed level cash flows.
//!
//! ## Features
//! - **Exact closed forms**: every value is a single IEEE-754 evaluation of a published formula, no simulation or root-finding
//! - **Ordinary and due**: annuities-certain in arrears and in advance, unit or scaled by a cash flow
//! - **Payment frequency**: nominal rate and term rescaled to any number of payments per year
//! - **Day-count bases**: daily compounding on 365- or 360-day years, plus annual and continuous forms
//! - **Stub periods**: valuation dates falling a number of days before the next payment
//! - **Builder Pattern**: all functions use builder pattern with automatic rate validation
//!
//! ## Quick Start
//!
//! ```rust
//! use rstvm::prelude::*;
//!
//! let annuity = annuity_pv()
//!     .cf(2000.0)
//!     .n(10.0)
//!     .i(0.06)
//!     .call()?;
//!
//! let monthly = annuity_due_freq_pv()
//!     .cf(500.0)
//!     .freq(12.0)
//!     .n(5.0)
//!     .i(0.06)
//!     .call()?;
//!
//! let consol = perpetuity_pv().cf(100.0).i(0.05).call()?;
//!
//! println!("Annuity PV: {:.4}", annuity);
//! println!("Monthly annuity due PV: {:.4}", monthly);
//! println!("Perpetuity PV: {:.2}", consol);
//! # TvmResult::Ok(())
//! ```
//!
//! ## Supported Functions
//!
//! - **Annuities Certain**: `unit_annuity_pv`, `unit_annuity_fv`, `unit_annuity_due_pv`, `unit_annuity_due_fv`, `annuity_pv`, `annuity_fv`, `annuity_due_pv`, `annuity_due_fv`
//! - **Payment Frequency**: `annuity_freq_pv`, `annuity_freq_fv`, `annuity_due_freq_pv`, `annuity_due_freq_fv`
//! - **Perpetuities**: `unit_perpetuity_pv`, `perpetuity_pv`, `pv_perpetuity_between_cf`
//! - **Day Count**: `day_count_pv`, `daily_basis_pv`, `daily_360_pv`
//! - **Annual and Continuous**: `annual_pv`, `annual_continuous_pv`
//! - **Cross Period**: `pv_between_cf`, `pv_between_cf_365`
//! - **Rate Conventions**: `scale`, `daily_rate`, `daily_growth_factor`, `effective_annual_rate`
//!
//! ## Notes
//! - Rates are decimals (0.06 for 6%)
//! - A rate of exactly zero fails with [`TvmError::InvalidRate`]; nothing else is validated
//! - Terms, frequencies and day counts are `f64`, so fractional values are evaluated as-is
//! - Every function is pure and may be called from any thread

pub type TvmResult<T> = Result<T, TvmError>;
pub use error::TvmError;

pub mod annuities_certain;
pub mod cross_period;
pub mod day_count;
pub mod error;
pub mod params;
pub mod perpetuities;
pub mod prelude;
pub mod present_values;
pub mod rate_convention;
