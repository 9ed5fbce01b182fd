use crate::TvmResult;
use crate::error::TvmError;
use bon::Builder;
use garde::Validate;

// =======================================
// RATE PARAMETER STRUCT
// =======================================
#[derive(Debug, Clone, Copy, Validate, Builder)]
pub struct RateParams {
    // Name of the valuation function, reported back in the error
    #[garde(skip)]
    pub operation: &'static str,

    // Nominal annual interest rate
    // Every closed form divides by a quantity that vanishes at zero
    // Negative rates and rates above 100% are accepted as-is
    #[garde(custom(nonzero_rate))]
    pub i: f64,
}

impl RateParams {
    /// Validate and convert the garde report into the crate error.
    pub fn validate_all(&self) -> TvmResult<()> {
        self.validate().map_err(|report| {
            log::debug!("{} rejected rate {}: {}", self.operation, self.i, report);
            TvmError::InvalidRate {
                operation: self.operation,
                reason: report.to_string(),
            }
        })
    }
}

/// Guard run by every valuation function before any arithmetic.
pub(crate) fn ensure_valid_rate(operation: &'static str, i: f64) -> TvmResult<()> {
    RateParams::builder()
        .operation(operation)
        .i(i)
        .build()
        .validate_all()
}

// =======================================
// PRIVATE FUNCTIONS
// =======================================

// `-0.0 == 0.0`, so both signed zeros are rejected. NaN is let through.
fn nonzero_rate(value: &f64, _ctx: &()) -> garde::Result {
    if *value == 0.0 {
        return Err(garde::Error::new("interest rate cannot be zero"));
    }
    Ok(())
}
