//! Session configuration.
//!
//! Layers, lowest to highest precedence:
//! 1. [`TimetableConfig::default`]
//! 2. `timetable.toml` (optional)
//! 3. `TIMETABLE_`-prefixed environment variables; nested keys use `__`
//!    (e.g. `TIMETABLE_SHAPE__BREAK_TIME=20h30`).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::models::ScheduleShape;

/// Default config file name.
pub const CONFIG_FILE: &str = "timetable.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TIMETABLE_";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("invalid schedule shape: {0}")]
    InvalidShape(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Grid days, time labels and break label.
    pub shape: ScheduleShape,
    /// How long notifications stay visible (ms).
    pub notification_ms: u64,
    /// Availability given to professors created from the quick-add form.
    pub default_availability: Vec<String>,
    /// Start sessions with the demo professors, rooms and suggestions.
    pub seed_demo_data: bool,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            shape: ScheduleShape::default(),
            notification_ms: 2000,
            default_availability: vec!["mon-19h00".into(), "wed-19h00".into()],
            seed_demo_data: true,
        }
    }
}

impl TimetableConfig {
    /// Loads from `timetable.toml` in the working directory and the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads from a given TOML file and the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path).extract()?;
        config.check()?;
        Ok(config)
    }

    /// The layered provider, for callers that want to merge more sources.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Notification display duration.
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Rejects shapes the grid cannot render.
    pub fn check(&self) -> Result<(), ConfigError> {
        let shape = &self.shape;
        if shape.days.is_empty() {
            return Err(ConfigError::InvalidShape("no days".into()));
        }
        if shape.times.is_empty() {
            return Err(ConfigError::InvalidShape("no time labels".into()));
        }
        if !shape.has_time(&shape.break_time) {
            return Err(ConfigError::InvalidShape(format!(
                "break label '{}' is not one of the time labels",
                shape.break_time
            )));
        }
        Ok(())
    }
}
