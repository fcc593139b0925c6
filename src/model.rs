use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One schedulable post. Only `date` and `is_published` change after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub is_published: bool,
    pub description: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    pub week_range_label: String,
    pub description: String,
    pub items: Vec<ContentItem>,
}

/// `content-<n>`, n being the 1-based position among successfully parsed entries.
pub fn content_id(sequence: usize) -> String {
    format!("content-{}", sequence)
}
