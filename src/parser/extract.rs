use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::sections::Entry;
use super::weekday;
use crate::error::{ParseError, Result};
use crate::model::{content_id, ContentItem};

static DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Post de (\w+(?:-\w+)?)").unwrap());
static NUMBER_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

const DESCRIPTION_LABEL: &str = "Descrição do Post (Imagem/Arte):";
const CAPTION_LABEL: &str = "Legenda:";

/// Build a `ContentItem` from one entry. `sequence` becomes the item id.
pub fn extract(entry: &Entry, anchor: NaiveDate, sequence: usize) -> Result<ContentItem> {
    let title_line = entry.marker_line().trim();

    let day = DAY_RE
        .captures(title_line)
        .map(|c| c[1].to_string())
        .ok_or_else(|| ParseError::UnknownDayToken {
            line: title_line.to_string(),
        })?;
    let date = weekday::resolve_day(&day, anchor)?;

    let mut scanner = FieldScanner::default();
    for line in entry.body() {
        scanner.feed(line);
    }
    let (description, caption) = scanner.finish();

    Ok(ContentItem {
        id: content_id(sequence),
        date,
        title: NUMBER_PREFIX_RE.replace(title_line, "").into_owned(),
        is_published: false,
        description,
        caption,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    None,
    Description,
    Caption,
}

/// Line-by-line accumulator for the two labelled free-text fields.
///
/// A label line switches the active field. Description lines are joined with a
/// space, caption lines with a newline. Blank lines and anything read while no
/// field is active are ignored.
#[derive(Debug, Default)]
pub struct FieldScanner {
    state: Field,
    description: String,
    caption: String,
}

impl FieldScanner {
    pub fn state(&self) -> Field {
        self.state
    }

    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(DESCRIPTION_LABEL) {
            self.state = Field::Description;
            self.description = rest.trim().to_string();
            return;
        }
        if line.starts_with(CAPTION_LABEL) {
            self.state = Field::Caption;
            return;
        }
        if line.is_empty() {
            return;
        }

        match self.state {
            Field::None => {}
            Field::Description => push_joined(&mut self.description, line, ' '),
            Field::Caption => push_joined(&mut self.caption, line, '\n'),
        }
    }

    pub fn finish(self) -> (String, String) {
        (
            self.description.trim().to_string(),
            self.caption.trim().to_string(),
        )
    }
}

fn push_joined(buf: &mut String, line: &str, sep: char) {
    if !buf.is_empty() {
        buf.push(sep);
    }
    buf.push_str(line);
}

// ── Tests ──
