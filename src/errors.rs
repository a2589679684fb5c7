use thiserror::Error;

/// The only failure mode of the governor: out-of-domain parameters.
/// The core performs no I/O, so there are no transient error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
