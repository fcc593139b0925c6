//! Turns a free-text weekly content plan (Portuguese weekday names) into dated,
//! schedulable content items, and keeps them in a small SQLite store.

pub mod batch;
pub mod db;
pub mod error;
pub mod model;
pub mod parser;
pub mod schedule;
pub mod settings;

pub use error::ParseError;
pub use model::{ContentItem, WeekPlan};
pub use parser::{parse_plan, parse_plan_current_year};
