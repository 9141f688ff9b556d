use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid booking request: {0}")]
    InvalidBookingRequest(String),
    #[error("No pricing available: room has no hourly tiers")]
    NoPricingAvailable,
    #[error("Ambiguous override: {0}")]
    AmbiguousOverride(String),
}
