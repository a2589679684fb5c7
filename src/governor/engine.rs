use crate::errors::AdvisorError;

use super::projection::project_monthly;
use super::rates::{MAX_LEVERAGE_CEILING, RateModel};
use super::solver::solve_min_leverage;
use super::types::{GoalInput, GoalVerdict};

pub const MAX_HORIZON_MONTHS: u32 = 120;

/// Evaluates whether the base strategy reaches the goal and, when it does not,
/// solves for the minimum sufficient leverage.
///
/// Pure and deterministic: no I/O, no logging, no shared state. Identical
/// inputs always produce identical outputs. The only failure mode is
/// `InvalidInput`; all invariants are re-checked here before any arithmetic so
/// out-of-domain parameters can never surface as NaN or infinity downstream.
pub fn evaluate_goal(input: &GoalInput, rates: &RateModel) -> Result<GoalVerdict, AdvisorError> {
    validate(input, rates)?;

    let base_apy = rates.supply_apy(input.strategy_asset).ok_or_else(|| {
        AdvisorError::InvalidInput(format!(
            "no supply APY configured for asset '{}'",
            input.strategy_asset.as_str()
        ))
    })?;

    let projected = project_monthly(input.principal, base_apy, input.horizon_months);
    let shortfall = input.target_amount - projected;

    // Meeting the goal exactly is success, not failure
    if shortfall <= 0.0 {
        return Ok(GoalVerdict::OnTrack {
            projected_amount: projected,
            base_apy_percent: base_apy * 100.0,
        });
    }

    let boost = solve_min_leverage(
        input.principal,
        input.target_amount,
        input.horizon_months,
        base_apy,
        rates.borrow_apr,
        rates.max_leverage,
    );

    Ok(GoalVerdict::BehindSchedule {
        projected_amount: projected,
        shortfall,
        base_apy_percent: base_apy * 100.0,
        boost,
    })
}

fn validate(input: &GoalInput, rates: &RateModel) -> Result<(), AdvisorError> {
    if !input.principal.is_finite() || input.principal <= 0.0 {
        return Err(AdvisorError::InvalidInput(format!(
            "principal must be a positive amount, got {}",
            input.principal
        )));
    }
    if !input.target_amount.is_finite() || input.target_amount <= 0.0 {
        return Err(AdvisorError::InvalidInput(format!(
            "target amount must be a positive amount, got {}",
            input.target_amount
        )));
    }
    if input.horizon_months < 1 || input.horizon_months > MAX_HORIZON_MONTHS {
        return Err(AdvisorError::InvalidInput(format!(
            "horizon must be between 1 and {} months, got {}",
            MAX_HORIZON_MONTHS, input.horizon_months
        )));
    }
    if let Some(apy) = rates.supply_apy(input.strategy_asset) {
        if !apy.is_finite() || apy <= 0.0 {
            return Err(AdvisorError::InvalidInput(format!(
                "supply APY for '{}' must be positive, got {}",
                input.strategy_asset.as_str(),
                apy
            )));
        }
    }
    if !rates.borrow_apr.is_finite() || rates.borrow_apr < 0.0 {
        return Err(AdvisorError::InvalidInput(format!(
            "borrow APR must be non-negative, got {}",
            rates.borrow_apr
        )));
    }
    if !rates.max_leverage.is_finite()
        || rates.max_leverage < 1.0
        || rates.max_leverage > MAX_LEVERAGE_CEILING
    {
        return Err(AdvisorError::InvalidInput(format!(
            "max leverage must be between 1.0 and {}, got {}",
            MAX_LEVERAGE_CEILING, rates.max_leverage
        )));
    }
    Ok(())
}
