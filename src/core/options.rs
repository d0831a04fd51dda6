//! Brute-force enumeration of the allocations that fit the budget and space.
use crate::core::error::ConfigError;
use crate::core::housing::{Allocation, Constraints, Housing};
use std::collections::HashSet;
use tracing::debug;

/// Most (cat cage, dog run) pairs a single enumeration will visit.
pub const MAX_SEARCH_PAIRS: u64 = 100_000_000;

/// Largest count of `housing` that could appear in any feasible allocation,
/// or `None` when that count is not finite or does not fit a `u32`.
///
/// Spending the whole budget and the whole floor on this one housing type is
/// the most any joint allocation can hold of it, so the bound never cuts off
/// a valid pair. It is not sufficient on its own: the joint check in
/// [`within_constraints`] still has to accept each pair.
pub fn max_count(constraints: &Constraints, housing: &Housing) -> Option<u32> {
    let by_space = constraints.available_space / housing.required_space;
    let by_budget = constraints.budget / housing.initial_cost;
    let bound = by_space.min(by_budget).floor();
    if !bound.is_finite() || bound < 0.0 || bound > f64::from(u32::MAX) {
        return None;
    }
    u32::try_from(bound as u64).ok()
}

/// Per-type search limits, rejected when either bound overflows or the grid
/// they span exceeds [`MAX_SEARCH_PAIRS`].
pub fn search_bounds(
    constraints: &Constraints,
    cat_cage: &Housing,
    dog_run: &Housing,
) -> Result<(u32, u32), ConfigError> {
    let bound_for = |housing: &'static str, h: &Housing| {
        max_count(constraints, h).ok_or_else(|| ConfigError::UnboundedSearch {
            housing,
            bound: (constraints.available_space / h.required_space)
                .min(constraints.budget / h.initial_cost)
                .floor(),
        })
    };
    let max_cages = bound_for("cat_cage", cat_cage)?;
    let max_runs = bound_for("dog_run", dog_run)?;

    let pairs = (u64::from(max_cages) + 1) * (u64::from(max_runs) + 1);
    if pairs > MAX_SEARCH_PAIRS {
        return Err(ConfigError::SearchTooLarge {
            pairs,
            limit: MAX_SEARCH_PAIRS,
        });
    }
    Ok((max_cages, max_runs))
}

/// Whether `cat_cages` and `dog_runs` together stay within both limits.
pub fn within_constraints(
    constraints: &Constraints,
    cat_cage: &Housing,
    dog_run: &Housing,
    cat_cages: u32,
    dog_runs: u32,
) -> bool {
    let (a, b) = (f64::from(cat_cages), f64::from(dog_runs));
    let cost = a * cat_cage.initial_cost + b * dog_run.initial_cost;
    let space = a * cat_cage.required_space + b * dog_run.required_space;
    cost <= constraints.budget && space <= constraints.available_space
}

/// Lists every feasible allocation, cat cages in the outer loop and dog runs
/// in the inner one, both ascending.
pub fn enumerate(
    constraints: &Constraints,
    cat_cage: &Housing,
    dog_run: &Housing,
) -> Result<Vec<Allocation>, ConfigError> {
    let (max_cages, max_runs) = search_bounds(constraints, cat_cage, dog_run)?;
    debug!(max_cages, max_runs, "Enumerating allocations");

    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for cat_cages in 0..=max_cages {
        for dog_runs in 0..=max_runs {
            if !within_constraints(constraints, cat_cage, dog_run, cat_cages, dog_runs) {
                continue;
            }
            let option = Allocation::new(cat_cages, dog_runs);
            if seen.insert(option) {
                options.push(option);
            }
        }
    }

    debug!(count = options.len(), "Found feasible allocations");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Constraints, Housing, Housing) {
        (Constraints::default(), Housing::CAT_CAGE, Housing::DOG_RUN)
    }

    #[test]
    fn test_max_count() {
        let (constraints, cat_cage, dog_run) = scenario();
        // Budget limits cages (1280 / 32), space limits runs (360 / 24).
        assert_eq!(max_count(&constraints, &cat_cage), Some(40));
        assert_eq!(max_count(&constraints, &dog_run), Some(15));
    }

    #[test]
    fn test_boundary_allocations() {
        let (constraints, cat_cage, dog_run) = scenario();
        let options = enumerate(&constraints, &cat_cage, &dog_run).unwrap();

        assert!(options.contains(&Allocation::new(0, 0)));
        assert!(options.contains(&Allocation::new(40, 0)));
        assert!(!options.contains(&Allocation::new(41, 0)));
        assert_eq!(options.len(), 349);
    }

    #[test]
    fn test_all_options_within_constraints() {
        let (constraints, cat_cage, dog_run) = scenario();
        for option in enumerate(&constraints, &cat_cage, &dog_run).unwrap() {
            let a = f64::from(option.cat_cages);
            let b = f64::from(option.dog_runs);
            assert!(a * 32.0 + b * 80.0 <= 1280.0, "{option:?} over budget");
            assert!(a * 6.0 + b * 24.0 <= 360.0, "{option:?} over space");
        }
    }

    #[test]
    fn test_enumeration_is_complete_and_unique() {
        let (constraints, cat_cage, dog_run) = scenario();
        let options = enumerate(&constraints, &cat_cage, &dog_run).unwrap();

        // Search well past the computed bounds to make sure nothing is missed.
        for a in 0..=60u32 {
            for b in 0..=30u32 {
                let feasible = within_constraints(&constraints, &cat_cage, &dog_run, a, b);
                let hits = options
                    .iter()
                    .filter(|o| o.cat_cages == a && o.dog_runs == b)
                    .count();
                assert_eq!(hits, usize::from(feasible), "pair ({a}, {b})");
            }
        }
    }

    #[test]
    fn test_insertion_order() {
        let (constraints, cat_cage, dog_run) = scenario();
        let options = enumerate(&constraints, &cat_cage, &dog_run).unwrap();
        assert_eq!(options[0], Allocation::new(0, 0));
        assert_eq!(options[1], Allocation::new(0, 1));
        assert!(options.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_enumeration_is_idempotent() {
        let (constraints, cat_cage, dog_run) = scenario();
        let first = enumerate(&constraints, &cat_cage, &dog_run).unwrap();
        let second = enumerate(&constraints, &cat_cage, &dog_run).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_budget_allows_only_empty_allocation() {
        let constraints = Constraints {
            available_space: 360.0,
            budget: 0.0,
        };
        let options = enumerate(&constraints, &Housing::CAT_CAGE, &Housing::DOG_RUN).unwrap();
        assert_eq!(options, vec![Allocation::new(0, 0)]);
    }

    #[test]
    fn test_tiny_housing_bound_is_not_truncated() {
        let tiny = Housing {
            initial_cost: 1e-9,
            required_space: 1e-9,
            daily_fee: 1.0,
        };
        // 360 / 1e-9 is far past u32::MAX, so no bound fits the counter.
        assert_eq!(max_count(&Constraints::default(), &tiny), None);

        let err = enumerate(&Constraints::default(), &tiny, &Housing::DOG_RUN).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnboundedSearch {
                housing: "cat_cage",
                ..
            }
        ));
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let cheap = Housing {
            initial_cost: 0.03125,
            required_space: 0.03125,
            daily_fee: 1.0,
        };
        // 11_521 * 11_521 pairs is over the search limit even though each
        // bound fits a u32.
        assert_eq!(max_count(&Constraints::default(), &cheap), Some(11_520));
        let err = search_bounds(&Constraints::default(), &cheap, &cheap).unwrap_err();
        assert_eq!(
            err,
            ConfigError::SearchTooLarge {
                pairs: 11_521 * 11_521,
                limit: MAX_SEARCH_PAIRS
            }
        );
    }

    #[test]
    fn test_search_bounds_defaults() {
        let (constraints, cat_cage, dog_run) = scenario();
        assert_eq!(search_bounds(&constraints, &cat_cage, &dog_run), Ok((40, 15)));
    }
}
