//! Cash balance projection for a single allocation.
use crate::core::housing::{Allocation, Housing, Outcome};

/// Upfront cost of building the allocation.
pub fn investment(allocation: &Allocation, cat_cage: &Housing, dog_run: &Housing) -> f64 {
    f64::from(allocation.cat_cages) * cat_cage.initial_cost
        + f64::from(allocation.dog_runs) * dog_run.initial_cost
}

/// Revenue earned per day once every unit is booked.
pub fn daily_revenue(allocation: &Allocation, cat_cage: &Housing, dog_run: &Housing) -> f64 {
    f64::from(allocation.cat_cages) * cat_cage.daily_fee
        + f64::from(allocation.dog_runs) * dog_run.daily_fee
}

/// Balance after paying for `allocation` and collecting `num_days` of fees.
///
/// Losses are returned as negative balances.
pub fn project(
    initial_balance: f64,
    allocation: &Allocation,
    cat_cage: &Housing,
    dog_run: &Housing,
    num_days: u32,
) -> f64 {
    initial_balance - investment(allocation, cat_cage, dog_run)
        + daily_revenue(allocation, cat_cage, dog_run) * f64::from(num_days)
}

/// Projects every allocation for the same day count, keeping input order.
pub fn outcomes(
    initial_balance: f64,
    allocations: &[Allocation],
    cat_cage: &Housing,
    dog_run: &Housing,
    num_days: u32,
) -> Vec<Outcome> {
    allocations
        .iter()
        .map(|allocation| Outcome {
            allocation: *allocation,
            final_balance: project(initial_balance, allocation, cat_cage, dog_run, num_days),
        })
        .collect()
}
