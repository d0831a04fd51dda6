//! Core business logic: the housing model, enumeration, projection and ranking

pub mod config;
pub mod error;
pub mod housing;
pub mod log;
pub mod options;
pub mod projection;
pub mod ranking;

// Re-export main types for cleaner imports
pub use config::AppConfig;
pub use error::ConfigError;
pub use housing::{Allocation, Constraints, Housing, Outcome};
pub use ranking::{DayRanking, Report};
