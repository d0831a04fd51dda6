//! Ranks projected outcomes and assembles the day-by-day report.
use crate::core::config::AppConfig;
use crate::core::error::ConfigError;
use crate::core::housing::Outcome;
use crate::core::{options, projection};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Best outcomes for a single day of the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRanking {
    pub day: u32,
    pub top: Vec<Outcome>,
}

/// Everything the report prints: how many allocations were considered and
/// the leaders for each day.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub option_count: usize,
    pub days: Vec<DayRanking>,
}

/// Sorts by final balance, highest first. Equal balances keep their input
/// order (`sort_by` is stable).
pub fn rank(mut outcomes: Vec<Outcome>) -> Vec<Outcome> {
    outcomes.sort_by(|a, b| {
        b.final_balance
            .partial_cmp(&a.final_balance)
            .unwrap_or(Ordering::Equal)
    });
    outcomes
}

/// The `n` best outcomes, in ranked order.
pub fn top(outcomes: Vec<Outcome>, n: usize) -> Vec<Outcome> {
    let mut ranked = rank(outcomes);
    ranked.truncate(n);
    ranked
}

/// Enumerates once, then projects and ranks every day from 1 to the horizon.
pub fn build_report(config: &AppConfig) -> Result<Report, ConfigError> {
    let cat_cage = &config.housing.cat_cage;
    let dog_run = &config.housing.dog_run;
    let allocations = options::enumerate(&config.constraints, cat_cage, dog_run)?;
    info!(count = allocations.len(), "Total options considered");

    let initial_balance = config.initial_balance();
    let days = (1..=config.horizon_days)
        .map(|day| {
            let outcomes =
                projection::outcomes(initial_balance, &allocations, cat_cage, dog_run, day);
            let best = top(outcomes, config.top_n);
            debug!(day, leader = ?best.first(), "Ranked outcomes");
            DayRanking { day, top: best }
        })
        .collect();

    Ok(Report {
        option_count: allocations.len(),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::housing::Allocation;

    fn outcome(cat_cages: u32, final_balance: f64) -> Outcome {
        Outcome {
            allocation: Allocation::new(cat_cages, 0),
            final_balance,
        }
    }

    fn balances(outcomes: &[Outcome]) -> Vec<f64> {
        outcomes.iter().map(|o| o.final_balance).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![outcome(0, 100.0), outcome(1, 300.0), outcome(2, 200.0)]);
        assert_eq!(balances(&ranked), vec![300.0, 200.0, 100.0]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let ranked = rank(vec![
            outcome(0, 50.0),
            outcome(1, 80.0),
            outcome(2, 50.0),
            outcome(3, 80.0),
        ]);
        let order: Vec<u32> = ranked.iter().map(|o| o.allocation.cat_cages).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_top_truncates() {
        let best = top(vec![outcome(0, 1.0), outcome(1, 3.0), outcome(2, 2.0)], 2);
        assert_eq!(balances(&best), vec![3.0, 2.0]);

        let all = top(vec![outcome(0, 1.0)], 3);
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_build_report_defaults() {
        let report = build_report(&AppConfig::default()).unwrap();
        assert_eq!(report.option_count, 349);
        assert_eq!(report.days.len(), 30);
        assert_eq!(report.days[0].day, 1);
        assert_eq!(report.days[29].day, 30);
        assert!(report.days.iter().all(|d| d.top.len() == 3));

        let day_one = &report.days[0].top;
        assert_eq!(
            day_one.iter().map(|o| o.allocation).collect::<Vec<_>>(),
            vec![
                Allocation::new(0, 0),
                Allocation::new(1, 0),
                Allocation::new(2, 0)
            ]
        );
        assert_eq!(balances(day_one), vec![1280.0, 1256.0, 1232.0]);
    }

    #[test]
    fn test_build_report_full_budget_wins_later() {
        let report = build_report(&AppConfig::default()).unwrap();
        let day_five = &report.days[4];
        assert_eq!(day_five.day, 5);
        assert_eq!(
            day_five.top.iter().map(|o| o.allocation).collect::<Vec<_>>(),
            vec![
                Allocation::new(10, 12),
                Allocation::new(15, 10),
                Allocation::new(20, 8)
            ]
        );
        assert_eq!(balances(&day_five.top), vec![1600.0; 3]);
    }

    #[test]
    fn test_build_report_respects_horizon_and_top_n() {
        let config = AppConfig {
            horizon_days: 4,
            top_n: 1,
            ..AppConfig::default()
        };
        let report = build_report(&config).unwrap();
        assert_eq!(report.days.len(), 4);
        assert!(report.days.iter().all(|d| d.top.len() == 1));
    }
}
