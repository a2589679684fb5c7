//! Compounding model shared by the base projection and the leverage solver.
//!
//! All arithmetic is IEEE-754 f64; decimal rounding happens only at the wire
//! boundary. Monthly compounding matches auto-compounding vault behavior and
//! the unit the horizon is expressed in.

/// Projects `principal` forward `months` months at an annual rate compounded
/// monthly: `principal * (1 + annual_rate / 12)^months`.
pub fn project_monthly(principal: f64, annual_rate: f64, months: u32) -> f64 {
    principal * (1.0 + annual_rate / 12.0).powi(months as i32)
}

/// Effective annual yield of a leveraged loop: supply yield on the full
/// position of `leverage` times principal, borrow cost on the `leverage - 1`
/// borrowed fraction.
pub fn net_leveraged_apy(base_apy: f64, borrow_apr: f64, leverage: f64) -> f64 {
    base_apy * leverage - borrow_apr * (leverage - 1.0)
}
