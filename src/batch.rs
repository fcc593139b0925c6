use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use rusqlite::Connection;
use tracing::{info, warn};

use crate::db;
use crate::model::WeekPlan;
use crate::parser::parse_plan;

pub fn read_plan(file: &Path, year: i32) -> Result<WeekPlan> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let plan =
        parse_plan(&text, year).with_context(|| format!("Failed to parse {}", file.display()))?;
    Ok(plan)
}

/// Parse every file in parallel. Results come back in argument order, one per file.
pub fn read_plans(files: &[PathBuf], year: i32) -> Vec<(&Path, Result<WeekPlan>)> {
    files
        .par_iter()
        .map(|f| {
            let res = read_plan(f, year);
            if let Err(e) = &res {
                warn!("Skipping {}: {:#}", f.display(), e);
            }
            (f.as_path(), res)
        })
        .collect()
}

/// Parse `file` and replace the stored plan with it. Nothing is written when parsing fails.
pub fn import_plan(conn: &Connection, file: &Path, year: i32) -> Result<WeekPlan> {
    let plan = read_plan(file, year)?;
    db::save_plan(conn, &plan)?;
    info!("Imported {} items from {}", plan.items.len(), file.display());
    Ok(plan)
}

// ── Tests ──
