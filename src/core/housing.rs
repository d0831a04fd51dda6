//! Domain types for the boarding business: housing units, the limits they
//! must fit within, and the candidate allocations built from them.
use serde::{Deserialize, Serialize};

/// A kind of pet housing that can be bought once and rented out daily.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Housing {
    pub initial_cost: f64,
    pub required_space: f64,
    pub daily_fee: f64,
}

impl Housing {
    pub const CAT_CAGE: Housing = Housing {
        initial_cost: 32.0,
        required_space: 6.0,
        daily_fee: 8.0,
    };

    pub const DOG_RUN: Housing = Housing {
        initial_cost: 80.0,
        required_space: 24.0,
        daily_fee: 20.0,
    };
}

/// Upper limits every allocation has to respect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub available_space: f64,
    pub budget: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints {
            available_space: 360.0,
            budget: 1280.0,
        }
    }
}

/// A candidate purchase: how many cat cages and dog runs to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Allocation {
    pub cat_cages: u32,
    pub dog_runs: u32,
}

impl Allocation {
    pub fn new(cat_cages: u32, dog_runs: u32) -> Self {
        Allocation {
            cat_cages,
            dog_runs,
        }
    }
}

/// Projected balance of an allocation after some number of days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub allocation: Allocation,
    pub final_balance: f64,
}
