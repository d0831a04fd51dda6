//! Command implementations behind the binary's subcommands

pub mod report;
pub mod setup;
pub mod ui;
