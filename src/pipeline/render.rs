// src/pipeline/render.rs

//! Plain-text rendering of search results.

use crate::models::Config;
use crate::services::SearchOutcome;

/// Render result cards followed by the stats line.
pub fn render_outcome(outcome: &SearchOutcome<'_>, config: &Config) -> String {
    let messages = &config.messages;
    let mut lines: Vec<String> = outcome
        .records
        .iter()
        .map(|record| {
            record.format(
                &config.display.card_template,
                &messages.unknown_school,
                &messages.unknown_year,
            )
        })
        .collect();

    lines.push(messages.format_stats(outcome.total, outcome.matched));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Period, Record};

    #[test]
    fn test_render_cards_and_stats() {
        let record = Record {
            name: "李明".to_string(),
            base_id: 1,
            full_id: "A1".to_string(),
            pinyin: "li ming".to_string(),
            pinyin_initials: "lm".to_string(),
            school: None,
            year: Some(2022),
            period: Period::Number(5),
        };
        let outcome = SearchOutcome {
            total: 10,
            matched: 1,
            records: vec![&record],
        };

        let mut config = Config::default();
        config.display.card_template = "{name} {full_id} {school} {year} {period}".to_string();

        assert_eq!(
            render_outcome(&outcome, &config),
            "李明 A1 未知学校 2022 5\n共加载 10 条记录，找到 1 条结果"
        );
    }

    #[test]
    fn test_render_no_results() {
        let outcome = SearchOutcome {
            total: 50,
            matched: 0,
            records: Vec::new(),
        };
        assert_eq!(
            render_outcome(&outcome, &Config::default()),
            "共加载 50 条记录，找到 0 条结果"
        );
    }
}
