use dotenvy::dotenv;
use std::env;

use crate::governor::rates::RateModel;
use crate::governor::types::StrategyAsset;

pub struct Config {
    pub rate_model: RateModel,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();

        let mut rate_model = RateModel::default();

        if let Some(apy) = read_fraction("SUPPLY_APY_STABLE") {
            rate_model.set_supply_apy(StrategyAsset::Stable, apy);
        }
        if let Some(apy) = read_fraction("SUPPLY_APY_VOLATILE") {
            rate_model.set_supply_apy(StrategyAsset::Volatile, apy);
        }
        if let Some(apy) = read_fraction("SUPPLY_APY_BALANCED") {
            rate_model.set_supply_apy(StrategyAsset::Balanced, apy);
        }
        if let Some(apr) = read_fraction("BORROW_APR") {
            rate_model.borrow_apr = apr;
        }
        if let Some(max) = read_fraction("MAX_LEVERAGE") {
            rate_model.max_leverage = max;
        }

        Config { rate_model }
    }
}

// Rates are annual fractions (0.045 = 4.5%), not percentages
fn read_fraction(key: &str) -> Option<f64> {
    match env::var(key) {
        Ok(raw) => {
            let value = raw
                .parse::<f64>()
                .unwrap_or_else(|_| panic!("Invalid {} value (must be a number)", key));
            Some(value)
        }
        Err(_) => None,
    }
}
