pub mod cli;
pub mod core;

use crate::cli::report::ReportStyle;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub days: Option<u32>,
    pub top: Option<usize>,
    pub style: ReportStyle,
}

pub enum AppCommand {
    Setup,
    Report(ReportOptions),
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Kennel planner starting...");

    match command {
        AppCommand::Setup => cli::setup::setup(),
        AppCommand::Report(options) => {
            let mut config = load_config(config_path)?;
            if let Some(days) = options.days {
                config.horizon_days = days;
            }
            if let Some(top) = options.top {
                config.top_n = top;
            }
            config.validate()?;
            cli::report::run(&config, options.style)
        }
    }
}
