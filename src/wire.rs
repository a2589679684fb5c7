//! Caller-facing request and report shapes.
//!
//! Narrative extraction upstream and presentation downstream both speak JSON;
//! this is the only place where numbers get rounded for display. The governor
//! itself stays in full f64 precision.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AdvisorError;
use crate::governor::engine::evaluate_goal;
use crate::governor::rates::RateModel;
use crate::governor::types::{GoalInput, GoalVerdict, RiskLevel, StrategyAsset};

/// Goal parameters as extracted from the user's narrative.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalRequest {
    pub current_principal: f64,
    pub target_amount: f64,
    pub time_horizon_months: u32,
    /// Optional asset tag; stable is assumed when omitted.
    #[serde(default)]
    pub current_strategy_asset: Option<String>,
}

impl GoalRequest {
    pub fn into_goal_input(self) -> Result<GoalInput, AdvisorError> {
        let strategy_asset = match self.current_strategy_asset.as_deref() {
            None => StrategyAsset::Stable,
            Some(tag) => StrategyAsset::from_str(tag).ok_or_else(|| {
                AdvisorError::InvalidInput(format!("unrecognized strategy asset '{}'", tag))
            })?,
        };

        Ok(GoalInput {
            principal: self.current_principal,
            target_amount: self.target_amount,
            horizon_months: self.time_horizon_months,
            strategy_asset,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "ON_TRACK")]
    OnTrack,
    #[serde(rename = "BEHIND_SCHEDULE")]
    BehindSchedule,
}

/// Leverage recommendation block, present only when behind schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub leverage_ratio_numeric: f64,
    pub new_apy_numeric: f64,
    pub projected_with_boost: f64,
    pub risk_level: RiskLevel,
}

/// Presentation-ready verdict. Every numeric field is rounded to 2 decimal
/// places here (the leverage ratio to 1), nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReport {
    pub status: ReportStatus,
    pub current_projection: f64,
    pub target_amount: f64,
    pub timeline_months: u32,
    /// Percent, e.g. 4.50
    pub base_apy: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
}

impl GoalReport {
    pub fn from_verdict(input: &GoalInput, verdict: &GoalVerdict) -> Self {
        match verdict {
            GoalVerdict::OnTrack {
                projected_amount,
                base_apy_percent,
            } => GoalReport {
                status: ReportStatus::OnTrack,
                current_projection: round_dp(*projected_amount, 2),
                target_amount: round_dp(input.target_amount, 2),
                timeline_months: input.horizon_months,
                base_apy: round_dp(*base_apy_percent, 2),
                shortfall: None,
                recommendation: None,
            },
            GoalVerdict::BehindSchedule {
                projected_amount,
                shortfall,
                base_apy_percent,
                boost,
            } => GoalReport {
                status: ReportStatus::BehindSchedule,
                current_projection: round_dp(*projected_amount, 2),
                target_amount: round_dp(input.target_amount, 2),
                timeline_months: input.horizon_months,
                base_apy: round_dp(*base_apy_percent, 2),
                shortfall: Some(round_dp(*shortfall, 2)),
                // A sufficient ratio is rounded UP to the next tenth: a
                // fractional leverage cap (e.g. 2.85x) must never be shown as
                // a lower tenth that falls short of the target.
                recommendation: Some(Recommendation {
                    leverage_ratio_numeric: if boost.meets_goal {
                        round_up_dp(boost.leverage_ratio, 1)
                    } else {
                        round_dp(boost.leverage_ratio, 1)
                    },
                    new_apy_numeric: round_dp(boost.net_apy_percent, 2),
                    projected_with_boost: round_dp(boost.projected_with_boost, 2),
                    risk_level: boost.risk_level,
                }),
            },
        }
    }
}

/// Evaluates a narrative-extracted request end to end and logs the outcome.
pub fn evaluate_request(request: GoalRequest, rates: &RateModel) -> Result<GoalReport, AdvisorError> {
    debug!(?request, "evaluating goal request");
    let input = request.into_goal_input()?;
    let verdict = evaluate_goal(&input, rates)?;
    let report = GoalReport::from_verdict(&input, &verdict);

    match report.status {
        ReportStatus::OnTrack => info!(
            projection = report.current_projection,
            target = report.target_amount,
            "goal on track at base yield"
        ),
        ReportStatus::BehindSchedule => info!(
            projection = report.current_projection,
            target = report.target_amount,
            shortfall = report.shortfall,
            leverage = report.recommendation.as_ref().map(|r| r.leverage_ratio_numeric),
            "goal behind schedule, leverage boost computed"
        ),
    }

    Ok(report)
}

fn round_dp(value: f64, dp: u32) -> f64 {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal.round_dp(dp).to_f64().unwrap_or(value),
        None => value,
    }
}

fn round_up_dp(value: f64, dp: u32) -> f64 {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(dp, RoundingStrategy::AwayFromZero)
            .to_f64()
            .unwrap_or(value),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(principal: f64, target: f64, months: u32) -> GoalRequest {
        GoalRequest {
            current_principal: principal,
            target_amount: target,
            time_horizon_months: months,
            current_strategy_asset: None,
        }
    }

    #[test]
    fn omitted_asset_defaults_to_stable() {
        let input = request(2000.0, 2500.0, 24).into_goal_input().unwrap();
        assert_eq!(input.strategy_asset, StrategyAsset::Stable);
    }

    #[test]
    fn unknown_asset_tag_is_rejected() {
        let mut req = request(2000.0, 2500.0, 24);
        req.current_strategy_asset = Some("dogecoin".to_string());
        assert!(matches!(
            req.into_goal_input(),
            Err(AdvisorError::InvalidInput(_))
        ));
    }

    #[test]
    fn on_track_report_omits_optional_fields() {
        let report = evaluate_request(request(5000.0, 5200.0, 12), &RateModel::default()).unwrap();
        assert_eq!(report.status, ReportStatus::OnTrack);
        assert_eq!(report.base_apy, 4.5);
        assert!(report.shortfall.is_none());
        assert!(report.recommendation.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "ON_TRACK");
        assert!(json.get("shortfall").is_none());
        assert!(json.get("recommendation").is_none());
    }

    #[test]
    fn behind_schedule_report_carries_recommendation() {
        let report = evaluate_request(request(2000.0, 2300.0, 24), &RateModel::default()).unwrap();
        assert_eq!(report.status, ReportStatus::BehindSchedule);
        assert_eq!(report.timeline_months, 24);

        let shortfall = report.shortfall.expect("shortfall present");
        assert!((shortfall - (2300.0 - report.current_projection)).abs() < 0.01);

        let rec = report.recommendation.expect("recommendation present");
        // 1-dp leverage ratio straight from the solver's tenth steps
        let tenths = rec.leverage_ratio_numeric * 10.0;
        assert!((tenths - tenths.round()).abs() < 1e-9);
        assert_eq!(rec.risk_level, RiskLevel::Medium);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "BEHIND_SCHEDULE");
        assert_eq!(json["recommendation"]["risk_level"], "Medium");
    }

    #[test]
    fn fractional_cap_recommendation_is_rounded_up_for_display() {
        use crate::governor::projection::{net_leveraged_apy, project_monthly};

        let mut rates = RateModel::default();
        rates.max_leverage = 2.85;

        // Target sits between the 2.8x and 2.85x projections: only the
        // fractional cap clears it
        let at_2_8 = project_monthly(2000.0, net_leveraged_apy(0.045, 0.02, 2.8), 24);
        let at_cap = project_monthly(2000.0, net_leveraged_apy(0.045, 0.02, 2.85), 24);
        let target = (at_2_8 + at_cap) / 2.0;

        let report = evaluate_request(request(2000.0, target, 24), &rates).unwrap();
        assert_eq!(report.status, ReportStatus::BehindSchedule);
        let rec = report.recommendation.expect("recommendation present");

        // 2.85x must surface as 2.9, never as a 2.8 that falls short
        assert_eq!(rec.leverage_ratio_numeric, 2.9);
        let at_displayed = project_monthly(
            2000.0,
            net_leveraged_apy(0.045, 0.02, rec.leverage_ratio_numeric),
            24,
        );
        assert!(at_displayed >= target);
    }

    #[test]
    fn report_numbers_are_rounded_for_display() {
        let report = evaluate_request(request(2000.0, 2500.0, 24), &RateModel::default()).unwrap();
        for value in [
            Some(report.current_projection),
            Some(report.base_apy),
            report.shortfall,
            report.recommendation.map(|r| r.new_apy_numeric),
            report.recommendation.map(|r| r.projected_with_boost),
        ]
        .into_iter()
        .flatten()
        {
            let cents = value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "unrounded value {}", value);
        }
    }

    #[test]
    fn invalid_request_surfaces_invalid_input() {
        assert!(matches!(
            evaluate_request(request(0.0, 2500.0, 24), &RateModel::default()),
            Err(AdvisorError::InvalidInput(_))
        ));
    }
}
