use std::path::PathBuf;

use chrono::{Datelike, Local};
use config::Config;

pub const DEFAULT_DB_PATH: &str = "data/content_plan.sqlite";
const ENV_PREFIX: &str = "PLANNER";

/// Settings read from `PLANNER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    /// Pinned plan year; `None` means the current year.
    pub year: Option<i32>,
}

impl Settings {
    pub fn load() -> Self {
        let cfg = Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .unwrap_or_default();
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &Config) -> Self {
        let db_path = cfg
            .get_string("db_path")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        let year = cfg
            .get_int("year")
            .ok()
            .and_then(|y| i32::try_from(y).ok());
        Settings { db_path, year }
    }

    pub fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }
}
