use std::sync::LazyLock;

use regex::Regex;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0*[1-9]\d*\.\s*Post de").unwrap());

/// Raw text of one numbered entry, marker line first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 1-based position among all entries, failed or not.
    pub position: usize,
    pub lines: Vec<&'a str>,
}

impl<'a> Entry<'a> {
    pub fn marker_line(&self) -> &'a str {
        self.lines[0]
    }

    pub fn body(&self) -> &[&'a str] {
        &self.lines[1..]
    }
}

pub fn is_entry_marker(line: &str) -> bool {
    ENTRY_RE.is_match(line.trim())
}

/// Split the lines following the header into one block per entry marker.
/// Anything before the first marker belongs to no block.
pub fn split_entries<'a>(lines: &[&'a str]) -> Vec<Entry<'a>> {
    let mut entries: Vec<Entry<'a>> = Vec::new();
    let mut current: Vec<&'a str> = Vec::new();

    for &line in lines {
        if is_entry_marker(line) {
            if !current.is_empty() {
                entries.push(Entry {
                    position: entries.len() + 1,
                    lines: std::mem::take(&mut current),
                });
            }
            current.push(line);
        } else if !current.is_empty() {
            current.push(line);
        }
    }

    if !current.is_empty() {
        entries.push(Entry {
            position: entries.len() + 1,
            lines: current,
        });
    }

    entries
}

// ── Tests ──
