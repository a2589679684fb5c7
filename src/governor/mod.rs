pub mod engine;
pub mod projection;
pub mod rates;
pub mod solver;
pub mod types;

pub use engine::evaluate_goal;
pub use rates::RateModel;
pub use types::{GoalInput, GoalVerdict, LeverageBoost, RiskLevel, StrategyAsset};
