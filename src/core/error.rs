use thiserror::Error;

/// Reasons a configuration is rejected at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid constraint: {name} must be a non-negative number, got {value}")]
    InvalidConstraint { name: &'static str, value: f64 },

    #[error("Invalid {housing}: {field} must be greater than zero, got {value}")]
    NonPositiveHousing {
        housing: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid {housing}: daily_fee must be a non-negative number, got {value}")]
    InvalidDailyFee { housing: &'static str, value: f64 },

    #[error("Invalid initial balance: {0}")]
    InvalidInitialBalance(f64),

    #[error("Invalid {housing}: up to {bound} units would fit, too many to enumerate")]
    UnboundedSearch { housing: &'static str, bound: f64 },

    #[error("Search space of {pairs} allocations exceeds the limit of {limit}")]
    SearchTooLarge { pairs: u64, limit: u64 },

    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },
}
