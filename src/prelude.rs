//! # RSTVM Prelude
//!
//! Conveniently re-exports the valuation functions and rate helpers.
//! Import this module to access all primary RSTVM features with a single `use` statement.
//!
//! ## Example
//!
//! ```rust
//! # use rstvm::prelude::*;
//! let due = annuity_due_pv().cf(100.0).n(10.0).i(0.05).call()?;
//! let immediate = annuity_pv().cf(100.0).n(10.0).i(0.05).call()?;
//! assert!((due - immediate * 1.05).abs() < 1e-9);
//! # TvmResult::Ok(())
//! ```

// Package Result and error types
pub use crate::{TvmError, TvmResult};

// Rate and period conventions
pub use crate::rate_convention::*;

// Certain annuities
pub use crate::annuities_certain::*;

// Perpetuities
pub use crate::perpetuities::*;

// Day-count, annual and continuous present values
pub use crate::day_count::*;
pub use crate::present_values::*;

// Valuation between cash flow dates
pub use crate::cross_period::*;
