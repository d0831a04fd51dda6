use crate::core::error::ConfigError;
use crate::core::housing::{Constraints, Housing};
use crate::core::options;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_cat_cage() -> Housing {
    Housing::CAT_CAGE
}

fn default_dog_run() -> Housing {
    Housing::DOG_RUN
}

fn default_horizon_days() -> u32 {
    30
}

fn default_top_n() -> usize {
    3
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HousingConfig {
    #[serde(default = "default_cat_cage")]
    pub cat_cage: Housing,
    #[serde(default = "default_dog_run")]
    pub dog_run: Housing,
}

impl Default for HousingConfig {
    fn default() -> Self {
        HousingConfig {
            cat_cage: Housing::CAT_CAGE,
            dog_run: Housing::DOG_RUN,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub housing: HousingConfig,
    /// Starting cash; the budget is used when unset.
    pub initial_balance: Option<f64>,
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            constraints: Constraints::default(),
            housing: HousingConfig::default(),
            initial_balance: None,
            horizon_days: default_horizon_days(),
            top_n: default_top_n(),
        }
    }
}

impl AppConfig {
    /// Loads the config at the default path, falling back to built-in values
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "kennelplan", "kennelplan")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance.unwrap_or(self.constraints.budget)
    }

    /// Rejects values that would make the enumeration unbounded or the
    /// projection meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let constraints = &self.constraints;
        for (name, value) in [
            ("available_space", constraints.available_space),
            ("budget", constraints.budget),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidConstraint { name, value });
            }
        }

        for (housing, h) in [
            ("cat_cage", &self.housing.cat_cage),
            ("dog_run", &self.housing.dog_run),
        ] {
            for (field, value) in [
                ("initial_cost", h.initial_cost),
                ("required_space", h.required_space),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::NonPositiveHousing {
                        housing,
                        field,
                        value,
                    });
                }
            }
            if !h.daily_fee.is_finite() || h.daily_fee < 0.0 {
                return Err(ConfigError::InvalidDailyFee {
                    housing,
                    value: h.daily_fee,
                });
            }
        }

        options::search_bounds(
            constraints,
            &self.housing.cat_cage,
            &self.housing.dog_run,
        )?;

        if let Some(balance) = self.initial_balance {
            if !balance.is_finite() {
                return Err(ConfigError::InvalidInitialBalance(balance));
            }
        }
        if self.horizon_days == 0 {
            return Err(ConfigError::ZeroCount {
                name: "horizon_days",
            });
        }
        if self.top_n == 0 {
            return Err(ConfigError::ZeroCount { name: "top_n" });
        }
        Ok(())
    }
}
