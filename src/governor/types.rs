use serde::{Deserialize, Serialize};

/// Asset class backing the base vault strategy. Selects the base supply APY
/// assumption in the rate model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyAsset {
    Stable,
    Volatile,
    Balanced,
}

impl StrategyAsset {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "stable" | "stablecoin" => Some(Self::Stable),
            "volatile" => Some(Self::Volatile),
            "balanced" => Some(Self::Balanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Volatile => "volatile",
            Self::Balanced => "balanced",
        }
    }
}

/// Validated evaluation parameters, USD-denominated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalInput {
    pub principal: f64,
    pub target_amount: f64,
    /// Bounded to [1, 120].
    pub horizon_months: u32,
    pub strategy_asset: StrategyAsset,
}

/// Risk bucket for a leverage ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// <= 1.5x Low, <= 2.5x Medium, above that High.
    pub fn for_leverage(leverage_ratio: f64) -> Self {
        if leverage_ratio <= 1.5 {
            Self::Low
        } else if leverage_ratio <= 2.5 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Leverage recommendation attached to a behind-schedule verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverageBoost {
    /// In [1.1, max_leverage], always an exact multiple of 0.1 except when the
    /// max-leverage fallback itself is not one.
    pub leverage_ratio: f64,
    /// Effective annual yield after borrow cost, in percent.
    pub net_apy_percent: f64,
    /// Monthly-compounded projection at the boosted rate over the horizon.
    pub projected_with_boost: f64,
    pub risk_level: RiskLevel,
    /// False when even max leverage falls short of the target.
    pub meets_goal: bool,
}

/// Outcome of a goal evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalVerdict {
    /// The base strategy alone meets or exceeds the target.
    #[serde(rename_all = "camelCase")]
    OnTrack {
        projected_amount: f64,
        base_apy_percent: f64,
    },
    /// The base strategy falls short; `boost` carries the best leverage step.
    #[serde(rename_all = "camelCase")]
    BehindSchedule {
        projected_amount: f64,
        shortfall: f64,
        base_apy_percent: f64,
        boost: LeverageBoost,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_buckets_at_boundaries() {
        assert_eq!(RiskLevel::for_leverage(1.1), RiskLevel::Low);
        assert_eq!(RiskLevel::for_leverage(1.5), RiskLevel::Low);
        assert_eq!(RiskLevel::for_leverage(1.6), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_leverage(2.5), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_leverage(2.6), RiskLevel::High);
        assert_eq!(RiskLevel::for_leverage(3.0), RiskLevel::High);
    }

    #[test]
    fn asset_tag_round_trip() {
        for asset in [
            StrategyAsset::Stable,
            StrategyAsset::Volatile,
            StrategyAsset::Balanced,
        ] {
            assert_eq!(StrategyAsset::from_str(asset.as_str()), Some(asset));
        }
        assert_eq!(StrategyAsset::from_str("STABLECOIN"), Some(StrategyAsset::Stable));
        assert_eq!(StrategyAsset::from_str("meme"), None);
    }
}
