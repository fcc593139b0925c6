use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::ContentItem;

pub fn mark_published(item: &ContentItem) -> ContentItem {
    ContentItem {
        is_published: true,
        ..item.clone()
    }
}

pub fn reschedule(item: &ContentItem, date: NaiveDate) -> ContentItem {
    ContentItem {
        date,
        ..item.clone()
    }
}

/// Calendar view: items keyed by day, source order kept within a day.
pub fn group_by_date(items: &[ContentItem]) -> BTreeMap<NaiveDate, Vec<&ContentItem>> {
    let mut days: BTreeMap<NaiveDate, Vec<&ContentItem>> = BTreeMap::new();
    for item in items {
        days.entry(item.date).or_default().push(item);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn item(id: &str, day: u32) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            title: format!("Post {}", id),
            is_published: false,
            description: "desc".into(),
            caption: "linha\nlinha".into(),
        }
    }

    #[test]
    fn publish_touches_only_the_flag() {
        let before = item("content-1", 2);
        let after = mark_published(&before);
        assert!(after.is_published);
        assert_eq!(ContentItem { is_published: false, ..after }, before);
    }

    #[test]
    fn reschedule_touches_only_the_date() {
        let before = item("content-2", 3);
        let new_date = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        let after = reschedule(&before, new_date);
        assert_eq!(after.date, new_date);
        assert_eq!(after.id, before.id);
        assert_eq!(after.caption, before.caption);
        assert!(!after.is_published);
    }

    #[test]
    fn grouping() {
        let items = vec![item("a", 5), item("b", 2), item("c", 5)];
        let days = group_by_date(&items);
        let keys: Vec<u32> = days.keys().map(|d| d.day()).collect();
        assert_eq!(keys, vec![2, 5]);
        let fifth: Vec<&str> = days[&NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()]
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(fifth, vec!["a", "c"]);
    }
}
