use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use content_planner::settings::Settings;
use content_planner::batch::{import_plan, read_plan, read_plans};
use content_planner::{db, schedule, WeekPlan};

#[derive(Parser)]
#[command(name = "content_planner", about = "Weekly content plan parser and scheduler")]
struct Cli {
    /// SQLite store (default: $PLANNER_DB_PATH or data/content_plan.sqlite)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Year the plan's DD/MM dates belong to (default: $PLANNER_YEAR or the current year)
    #[arg(long, global = true)]
    year: Option<i32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a plan and print it as JSON
    Parse { file: PathBuf },
    /// Parse several plans and report how many items each yields
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Parse a plan and replace the stored schedule with it
    Import { file: PathBuf },
    /// Show the stored schedule, grouped by day
    List,
    /// Mark an item as published
    Publish { id: String },
    /// Move an item to another day (YYYY-MM-DD)
    Reschedule { id: String, date: NaiveDate },
    /// Show published/pending counts
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load();
    let year = cli.year.unwrap_or_else(|| settings.year());
    let db_path = cli.db.unwrap_or(settings.db_path);

    let result = match cli.command {
        Commands::Parse { file } => {
            let plan = read_plan(&file, year)?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
        Commands::Check { files } => {
            let results = read_plans(&files, year);

            let mut failed = 0;
            for (file, res) in &results {
                match res {
                    Ok(plan) => println!(
                        "{:<32} | {:>3} items | {}",
                        truncate(&file.display().to_string(), 32),
                        plan.items.len(),
                        plan.week_range_label.trim()
                    ),
                    Err(e) => {
                        failed += 1;
                        println!("{:<32} | error: {:#}", truncate(&file.display().to_string(), 32), e);
                    }
                }
            }
            if failed > 0 {
                bail!("{} of {} plans could not be parsed", failed, results.len());
            }
            Ok(())
        }
        Commands::Import { file } => {
            let conn = db::connect(&db_path)?;
            db::init_schema(&conn)?;
            let plan = import_plan(&conn, &file, year)?;
            info!("Saved {} items to {}", plan.items.len(), db_path.display());
            println!("Imported {} items from {}", plan.items.len(), file.display());
            Ok(())
        }
        Commands::List => {
            let conn = db::connect(&db_path)?;
            db::init_schema(&conn)?;
            let Some(plan) = db::load_plan(&conn)? else {
                println!("No plan stored. Run 'import' first.");
                return Ok(());
            };
            print_schedule(&plan);
            Ok(())
        }
        Commands::Publish { id } => {
            let conn = db::connect(&db_path)?;
            db::init_schema(&conn)?;
            let item = db::find_item(&conn, &id)?.with_context(|| format!("No item with id {}", id))?;
            db::update_one(&conn, &schedule::mark_published(&item))?;
            println!("Published {} ({})", item.id, item.title);
            Ok(())
        }
        Commands::Reschedule { id, date } => {
            let conn = db::connect(&db_path)?;
            db::init_schema(&conn)?;
            let item = db::find_item(&conn, &id)?.with_context(|| format!("No item with id {}", id))?;
            db::update_one(&conn, &schedule::reschedule(&item, date))?;
            println!("Moved {} from {} to {}", item.id, item.date, date);
            Ok(())
        }
        Commands::Stats => {
            let conn = db::connect(&db_path)?;
            db::init_schema(&conn)?;
            let s = db::get_stats(&conn)?;
            println!("Total:     {}", s.total);
            println!("Published: {}", s.published);
            println!("Pending:   {}", s.pending);
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_schedule(plan: &WeekPlan) {
    println!("{}", plan.week_range_label.trim());
    if !plan.description.is_empty() {
        println!("{}", plan.description);
    }
    println!();

    for (date, items) in schedule::group_by_date(&plan.items) {
        println!("{} ({})", date, date.format("%a"));
        for item in items {
            let mark = if item.is_published { "x" } else { " " };
            println!("  [{}] {:<11} {}", mark, item.id, truncate(&item.title, 60));
        }
    }

    let published = plan.items.iter().filter(|i| i.is_published).count();
    println!("\n{} items | {} published", plan.items.len(), published);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
