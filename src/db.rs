use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

use crate::model::{ContentItem, WeekPlan};

pub fn connect(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS plans (
            id               INTEGER PRIMARY KEY CHECK (id = 1),
            week_range_label TEXT NOT NULL,
            description      TEXT NOT NULL,
            imported_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS content_items (
            id           TEXT PRIMARY KEY,
            position     INTEGER NOT NULL,
            date         TEXT NOT NULL,
            title        TEXT NOT NULL,
            is_published BOOLEAN NOT NULL DEFAULT 0,
            description  TEXT NOT NULL,
            caption      TEXT NOT NULL,
            updated_at   TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_items_date ON content_items(date);
        ",
    )?;
    Ok(())
}

// ── Items ──

/// Replace the stored list with `items`, keeping their order.
pub fn save_all(conn: &Connection, items: &[ContentItem]) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    write_items(&tx, items)?;
    tx.commit()?;
    Ok(())
}

fn write_items(conn: &Connection, items: &[ContentItem]) -> Result<()> {
    conn.execute("DELETE FROM content_items", [])?;
    let mut stmt = conn.prepare(
        "INSERT INTO content_items
         (id, position, date, title, is_published, description, caption)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for (pos, item) in items.iter().enumerate() {
        stmt.execute(rusqlite::params![
            item.id,
            pos as i64,
            item.date,
            item.title,
            item.is_published,
            item.description,
            item.caption,
        ])
        .with_context(|| format!("Failed to save {}", item.id))?;
    }
    Ok(())
}

pub fn load_all(conn: &Connection) -> Result<Vec<ContentItem>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, title, is_published, description, caption
         FROM content_items
         ORDER BY position",
    )?;
    let rows = stmt
        .query_map([], row_to_item)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find_item(conn: &Connection, id: &str) -> Result<Option<ContentItem>> {
    let item = conn
        .query_row(
            "SELECT id, date, title, is_published, description, caption
             FROM content_items WHERE id = ?1",
            [id],
            row_to_item,
        )
        .optional()?;
    Ok(item)
}

/// Replace the stored item with the same id. Returns `false` when no such item exists.
pub fn update_one(conn: &Connection, item: &ContentItem) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE content_items
         SET date = ?2, title = ?3, is_published = ?4, description = ?5, caption = ?6,
             updated_at = datetime('now')
         WHERE id = ?1",
        rusqlite::params![
            item.id,
            item.date,
            item.title,
            item.is_published,
            item.description,
            item.caption,
        ],
    )?;
    Ok(changed > 0)
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<ContentItem> {
    Ok(ContentItem {
        id: row.get(0)?,
        date: row.get(1)?,
        title: row.get(2)?,
        is_published: row.get(3)?,
        description: row.get(4)?,
        caption: row.get(5)?,
    })
}

// ── Plans ──

/// Store the plan header and replace all items in one transaction.
pub fn save_plan(conn: &Connection, plan: &WeekPlan) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT OR REPLACE INTO plans (id, week_range_label, description)
         VALUES (1, ?1, ?2)",
        rusqlite::params![plan.week_range_label, plan.description],
    )?;
    write_items(&tx, &plan.items)?;
    tx.commit()?;
    Ok(())
}

pub fn load_plan(conn: &Connection) -> Result<Option<WeekPlan>> {
    let header: Option<(String, String)> = conn
        .query_row(
            "SELECT week_range_label, description FROM plans WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match header {
        Some((week_range_label, description)) => Ok(Some(WeekPlan {
            week_range_label,
            description,
            items: load_all(conn)?,
        })),
        None => Ok(None),
    }
}

// ── Stats ──

pub struct Stats {
    pub total: usize,
    pub published: usize,
    pub pending: usize,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let total: usize = conn.query_row("SELECT COUNT(*) FROM content_items", [], |r| r.get(0))?;
    let published: usize = conn.query_row(
        "SELECT COUNT(*) FROM content_items WHERE is_published = 1",
        [],
        |r| r.get(0),
    )?;
    Ok(Stats {
        total,
        published,
        pending: total - published,
    })
}

// ── Tests ──
