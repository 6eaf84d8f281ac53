use itertools::Itertools;
use serde_json::Value;

use crate::enrich::{Outcome, LAUNCH_DATE, SEASON, SEASON_YEAR, SKU_ID};

pub fn summary_lines(outcome: &Outcome, preview: usize) -> Vec<String> {
    let total = outcome.records.len();
    let mut lines = Vec::new();
    if outcome.written {
        lines.push(format!(
            "Updated {} SKU records ({} with launch_date)",
            total, outcome.enriched
        ));
    } else {
        lines.push(format!(
            "Dry run: {} SKU records processed ({} with launch_date), file not written",
            total, outcome.enriched
        ));
    }

    let shown = preview.min(total);
    lines.push(format!("First {} records:", shown));
    for record in outcome.records.iter().take(shown) {
        lines.push(format!(
            "  SKU: {}, Season: {} {}, Launch Date: {}",
            field(record, SKU_ID),
            field(record, SEASON_YEAR),
            field(record, SEASON),
            field(record, LAUNCH_DATE),
        ));
    }

    if !outcome.waves.is_empty() {
        lines.push("Launch waves:".to_string());
        for group in &outcome.waves {
            lines.push(format!(
                "  {} {}: {} SKUs, {} launch dates: {}",
                group.year,
                group.season,
                group.count,
                group.dates.len(),
                group.dates.iter().join(", ")
            ));
        }
    }
    lines
}

pub fn print(outcome: &Outcome, preview: usize) {
    for line in summary_lines(outcome, preview) {
        println!("{}", line);
    }
}

fn field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;
    use crate::waves::WaveGroup;
    use chrono::NaiveDate;
    use serde_json::json;

    fn outcome(records: Vec<Value>, written: bool) -> Outcome {
        Outcome {
            enriched: records.len(),
            records,
            waves: Vec::new(),
            written,
        }
    }

    #[test]
    fn preview_first_three() {
        let records = (1..=5)
            .map(|i| {
                json!({"sku_id": format!("S{i}"), "season_year": 2024, "season": "Q1", "launch_date": "2024-02-01"})
            })
            .collect();
        let lines = summary_lines(&outcome(records, true), 3);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Updated 5 SKU records (5 with launch_date)");
        assert_eq!(lines[1], "First 3 records:");
        assert_eq!(
            lines[2],
            "  SKU: S1, Season: 2024 Q1, Launch Date: 2024-02-01"
        );
    }

    #[test]
    fn missing_fields_render_as_dash() {
        let lines = summary_lines(&outcome(vec![json!({"sku_id": "S3"})], false), 3);
        assert!(lines[0].starts_with("Dry run: 1 SKU records"));
        assert_eq!(lines[1], "First 1 records:");
        assert_eq!(lines[2], "  SKU: S3, Season: - -, Launch Date: -");
    }

    #[test]
    fn wave_summary() {
        let mut out = outcome(Vec::new(), true);
        out.waves.push(WaveGroup {
            year: 2024,
            season: Season::Q2,
            count: 16,
            dates: vec![
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            ],
        });
        let lines = summary_lines(&out, 3);
        assert_eq!(
            lines.last().unwrap(),
            "  2024 Q2: 16 SKUs, 2 launch dates: 2024-05-01, 2024-05-15"
        );
    }
}
