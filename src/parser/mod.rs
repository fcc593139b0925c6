pub mod extract;
pub mod header;
pub mod sections;
pub mod weekday;

use chrono::{Datelike, Local};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::WeekPlan;

/// Header → entries → items. Header failures abort; a bad entry is logged and skipped.
pub fn parse_plan(text: &str, year: i32) -> Result<WeekPlan> {
    let lines: Vec<&str> = text.lines().collect();

    let header = header::resolve(&lines, year)?;
    debug!(
        line = header.index + 1,
        start = %header.range.start,
        end = %header.range.end,
        "Resolved plan header"
    );

    let body = &lines[header.index + 1..];
    let description = body
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .filter(|l| !sections::is_entry_marker(l))
        .unwrap_or_default()
        .to_string();

    let entries = sections::split_entries(body);
    let mut items = Vec::with_capacity(entries.len());

    for entry in &entries {
        match extract::extract(entry, header.range.start, items.len() + 1) {
            Ok(item) => items.push(item),
            Err(e) if e.is_recoverable() => {
                warn!(entry = entry.position, "Failed to parse content entry: {}", e);
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Parsed {} of {} entries for {}",
        items.len(),
        entries.len(),
        header.line.trim()
    );

    Ok(WeekPlan {
        week_range_label: header.line.to_string(),
        description,
        items,
    })
}

/// Same as [`parse_plan`], with the year taken from the local clock.
pub fn parse_plan_current_year(text: &str) -> Result<WeekPlan> {
    parse_plan(text, Local::now().year())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use chrono::NaiveDate;

    const EXAMPLE: &str = "Plano de Conteúdo Semanal (02/08 a 08/08)\n1. Post de Sábado (Foco: Geral)\nDescrição do Post (Imagem/Arte): Foto.\nLegenda:\nLinha um\nLinha dois";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_entry_example() {
        // 02/08/2025 is a Saturday
        let plan = parse_plan(EXAMPLE, 2025).unwrap();
        assert_eq!(plan.week_range_label, "Plano de Conteúdo Semanal (02/08 a 08/08)");
        assert_eq!(plan.items.len(), 1);
        let item = &plan.items[0];
        assert_eq!(item.id, "content-1");
        assert_eq!(item.date, ymd(2025, 8, 2));
        assert_eq!(item.title, "Post de Sábado (Foco: Geral)");
        assert_eq!(item.description, "Foto.");
        assert_eq!(item.caption, "Linha um\nLinha dois");
        assert!(!item.is_published);
        // First line after the header is already an entry
        assert_eq!(plan.description, "");
    }

    #[test]
    fn empty_input_has_no_header() {
        assert_eq!(parse_plan("", 2025).unwrap_err(), ParseError::MissingHeader);
        assert_eq!(parse_plan("   \n\n", 2025).unwrap_err(), ParseError::MissingHeader);
    }

    #[test]
    fn malformed_range_is_fatal() {
        let text = "Plano de Conteúdo Semanal (agosto)\n1. Post de Sábado";
        assert!(matches!(
            parse_plan(text, 2025),
            Err(ParseError::MalformedDateRange { .. })
        ));
    }

    #[test]
    fn header_without_entries() {
        let plan = parse_plan("Plano de Conteúdo Semanal (02/08 a 08/08)\nSemana tranquila.", 2025).unwrap();
        assert!(plan.items.is_empty());
        assert_eq!(plan.description, "Semana tranquila.");
    }

    #[test]
    fn failed_entry_does_not_consume_an_id() {
        let text = "Plano de Conteúdo Semanal (02/08 a 08/08)\n\
                    1. Post de Sábado\n\
                    2. Post de (Especial)\n\
                    3. Post de Feriado\n\
                    4. Post de Segunda-feira";
        let plan = parse_plan(text, 2025).unwrap();
        let ids: Vec<&str> = plan.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["content-1", "content-2"]);
        assert_eq!(plan.items[1].date, ymd(2025, 8, 4));
        assert_eq!(plan.items[1].title, "Post de Segunda-feira");
    }

    #[test]
    fn crlf_input() {
        let text = EXAMPLE.replace('\n', "\r\n");
        let plan = parse_plan(&text, 2025).unwrap();
        assert_eq!(plan.items[0].caption, "Linha um\nLinha dois");
        assert_eq!(plan.week_range_label, "Plano de Conteúdo Semanal (02/08 a 08/08)");
    }

    #[test]
    fn weekly_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/semana.txt").unwrap();
        let plan = parse_plan(&text, 2025).unwrap();

        assert!(plan.week_range_label.contains("(02/08 a 08/08)"));
        assert!(plan.description.starts_with("Aqui estão"));
        assert_eq!(plan.items.len(), 7);

        let dates: Vec<NaiveDate> = plan.items.iter().map(|i| i.date).collect();
        assert_eq!(
            dates,
            vec![
                ymd(2025, 8, 2),
                ymd(2025, 8, 3),
                ymd(2025, 8, 4),
                ymd(2025, 8, 5),
                ymd(2025, 8, 6),
                ymd(2025, 8, 7),
                ymd(2025, 8, 8),
            ]
        );
        for (n, item) in plan.items.iter().enumerate() {
            assert_eq!(item.id, format!("content-{}", n + 1));
            assert!(!item.title.starts_with(char::is_numeric), "{}", item.title);
        }

        let saturday = &plan.items[0];
        assert_eq!(
            saturday.description,
            "Foto energética da equipe no início do treino, com todos sorrindo."
        );
        assert!(saturday.caption.starts_with("Atenção: Aquele gás extra"));
        assert!(saturday.caption.contains('\n'));
    }

    #[test]
    fn current_year_policy() {
        let plan = parse_plan_current_year(EXAMPLE).unwrap();
        let date = plan.items[0].date;
        assert_eq!(date.year(), Local::now().year());
        assert_eq!(date.month(), 8);
        assert!((2..=8).contains(&date.day()));
    }
}
