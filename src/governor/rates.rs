use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::StrategyAsset;

/// Default annual supply yield assumption for stablecoin vaults
pub const DEFAULT_STABLE_SUPPLY_APY: f64 = 0.045;
/// Default annual supply yield assumption for everything else
pub const DEFAULT_OTHER_SUPPLY_APY: f64 = 0.038;
/// Default annual cost of borrowed capital
pub const DEFAULT_BORROW_APR: f64 = 0.02;
/// Default cap on the leverage ratio
pub const DEFAULT_MAX_LEVERAGE: f64 = 3.0;
/// Hard ceiling on any configured leverage cap. Keeps the solver's tenth-step
/// scan bounded even under pathological overrides.
pub const MAX_LEVERAGE_CEILING: f64 = 10.0;

/// Yield and borrow-cost assumptions used by the governor. Operator
/// configuration, not user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateModel {
    /// Base supply APY per strategy asset, annual fraction (0.045 = 4.5%).
    supply_apy: BTreeMap<StrategyAsset, f64>,
    /// Annual fraction charged on the borrowed share of a leveraged position.
    pub borrow_apr: f64,
    /// Upper bound on the leverage ratio, >= 1.0.
    pub max_leverage: f64,
}

impl Default for RateModel {
    fn default() -> Self {
        let mut supply_apy = BTreeMap::new();
        supply_apy.insert(StrategyAsset::Stable, DEFAULT_STABLE_SUPPLY_APY);
        supply_apy.insert(StrategyAsset::Volatile, DEFAULT_OTHER_SUPPLY_APY);
        supply_apy.insert(StrategyAsset::Balanced, DEFAULT_OTHER_SUPPLY_APY);

        Self {
            supply_apy,
            borrow_apr: DEFAULT_BORROW_APR,
            max_leverage: DEFAULT_MAX_LEVERAGE,
        }
    }
}

impl RateModel {
    pub fn supply_apy(&self, asset: StrategyAsset) -> Option<f64> {
        self.supply_apy.get(&asset).copied()
    }

    pub fn set_supply_apy(&mut self, asset: StrategyAsset, apy: f64) {
        self.supply_apy.insert(asset, apy);
    }
}
