pub mod config;
pub mod errors;
pub mod governor;
pub mod logging;
pub mod wire;

pub use errors::AdvisorError;
pub use governor::engine::evaluate_goal;
