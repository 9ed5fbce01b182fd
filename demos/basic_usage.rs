//! # RSTVM Basic Usage Example
//!
//! This example demonstrates the basic usage of the rstvm crate for
//! time-value-of-money valuations using the builder pattern API.
//!
//! Run with `RUST_LOG=debug` to see the rate guard reject the last scenario.

use rstvm::prelude::*;

fn main() -> TvmResult<()> {
    env_logger::init();

    println!("RSTVM Basic Usage Example");
    println!("=========================");
    println!();

    let cf = 2000.0;
    let frequency = 12.0;
    let years = 10.0;
    let i = 0.06;
    let days = 45.0;

    // Annuities certain, 4 decimal places
    println!("=== Annuities (CF {cf}, frequency {frequency}, {years} years, i = {i}) ===");
    let unit_pv = unit_annuity_pv().n(years).i(i).call()?;
    let pv = annuity_pv().cf(cf).n(years).i(i).call()?;
    let freq_pv = annuity_freq_pv().cf(cf).freq(frequency).n(years).i(i).call()?;
    let unit_due_pv = unit_annuity_due_pv().n(years).i(i).call()?;
    let due_pv = annuity_due_pv().cf(cf).n(years).i(i).call()?;
    let due_freq_pv = annuity_due_freq_pv().cf(cf).freq(frequency).n(years).i(i).call()?;

    println!("The unit annuity PV is: {unit_pv:10.4}");
    println!("The annuity PV is: {pv:10.4}");
    println!("The annuity PV with frequency {frequency} is: {freq_pv:10.4}");
    println!("The unit annuity due PV is: {unit_due_pv:10.4}");
    println!("The annuity due PV is: {due_pv:10.4}");
    println!("The annuity due PV with frequency {frequency} is: {due_freq_pv:10.4}");

    let fv = annuity_fv().cf(cf).n(years).i(i).call()?;
    let due_fv = annuity_due_fv().cf(cf).n(years).i(i).call()?;
    println!("The annuity FV is: {fv:10.4}");
    println!("The annuity due FV is: {due_fv:10.4}");

    // Present values on different compounding bases
    println!("\n=== Present Values ===");
    let annual = annual_pv().n(years).cf(cf).i(i).call()?;
    println!("Annual PV: {annual:.2} (expected 14720.17)");
    let daily_365 = daily_basis_pv().n(years).cf(cf).i(i).call()?;
    println!("Actual:PV365  {daily_365:.4}");
    let daily_360 = daily_360_pv().n(years).cf(cf).i(i).call()?;
    println!("Actual:PV360  {daily_360:.4}");
    let continuous = annual_continuous_pv().n(years).cf(cf).i(i).call()?;
    println!("Actual:PVContinuous  {continuous:.4}");

    // Valuation between two cash flow dates, 2 decimal places
    println!("\n=== Between Cash Flows ({days} days to the first payment) ===");
    let between = pv_between_cf_365().days(days).n(years).cf(cf).i(i).call()?;
    println!("PV CF In Between 365 Rule:  {between:.2}");
    let perpetuity_between = pv_perpetuity_between_cf().days(days).cf(cf).i(i).call()?;
    println!("Perpetuity PV In Between 365 Rule:  {perpetuity_between:.2}");
    let consol = perpetuity_pv().cf(cf).i(i).call()?;
    println!("Perpetuity PV: {consol:.2}");

    // Zero rate is the only rejected input
    println!("\n=== Rate Validation ===");
    match annuity_pv().cf(cf).n(years).i(0.0).call() {
        Ok(value) => println!("Unexpected value: {value}"),
        Err(err) => println!("Rejected: {err}"),
    }

    println!("\n✓ All calculations completed successfully!");

    Ok(())
}
