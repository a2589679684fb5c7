use super::projection::{net_leveraged_apy, project_monthly};
use super::types::{LeverageBoost, RiskLevel};

/// Smallest leverage step the solver will recommend.
const MIN_LEVERAGE_STEP: u32 = 11; // 1.1x, in tenths

/// Finds the minimum sufficient leverage ratio at 0.1 granularity.
///
/// Scans 1.1x, 1.2x, ... up to `max_leverage` and returns the first step whose
/// boosted projection reaches the target. The boosted projection is monotone in
/// the ratio whenever `base_apy > borrow_apr`, so the first hit is also the
/// minimum. Only exact tenths are ever evaluated, which keeps recommendations
/// human-readable and guarantees the reported ratio clears the target whenever
/// `meets_goal` is true.
///
/// If no step up to the cap clears the target, the cap itself is recommended
/// with `meets_goal = false` — best achievable, never an error.
pub fn solve_min_leverage(
    principal: f64,
    target_amount: f64,
    horizon_months: u32,
    base_apy: f64,
    borrow_apr: f64,
    max_leverage: f64,
) -> LeverageBoost {
    let max_step = (max_leverage * 10.0 + 1e-9).floor() as u32;

    let mut last_scanned: Option<(f64, f64, f64)> = None;
    for step in MIN_LEVERAGE_STEP..=max_step {
        let leverage = f64::from(step) / 10.0;
        let net_apy = net_leveraged_apy(base_apy, borrow_apr, leverage);
        let projected = project_monthly(principal, net_apy, horizon_months);
        if projected >= target_amount {
            return LeverageBoost {
                leverage_ratio: leverage,
                net_apy_percent: net_apy * 100.0,
                projected_with_boost: projected,
                risk_level: RiskLevel::for_leverage(leverage),
                meets_goal: true,
            };
        }
        last_scanned = Some((leverage, net_apy, projected));
    }

    // A cap that is not a tenth multiple (e.g. 2.85x) is tried as the final
    // candidate, so configured headroom above the last scanned step still
    // counts. An exact-tenth cap reuses the result the loop just produced.
    let (leverage, net_apy, projected) = match last_scanned {
        Some(scanned) if (scanned.0 - max_leverage).abs() < 1e-9 => scanned,
        _ => {
            let net_apy = net_leveraged_apy(base_apy, borrow_apr, max_leverage);
            let projected = project_monthly(principal, net_apy, horizon_months);
            (max_leverage, net_apy, projected)
        }
    };
    LeverageBoost {
        leverage_ratio: leverage,
        net_apy_percent: net_apy * 100.0,
        projected_with_boost: projected,
        risk_level: RiskLevel::for_leverage(leverage),
        meets_goal: projected >= target_amount,
    }
}
