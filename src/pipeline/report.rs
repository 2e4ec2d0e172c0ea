// src/pipeline/report.rs

//! Report rendering.
//!
//! Two tables: per-tag unsolved ratios for contests the handle entered,
//! and the global tag frequency baseline across all analyzed contests.

use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};

use crate::pipeline::aggregate::TagCounters;

/// Guidance shown when the handle never participated.
const NO_PARTICIPATION_HINT: &str =
    "You must participate in at least one contest to see unsolved statistics";

/// One row of the unsolved-statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioRow {
    pub tag: String,
    pub ratio: f64,
    pub unsolved_count: u64,
    pub total_count: u64,
}

/// Ratio rows for every tag the handle meaningfully engaged with,
/// hardest tags first.
pub fn ratio_rows(counters: &TagCounters) -> Vec<RatioRow> {
    let mut rows: Vec<RatioRow> = counters
        .participated()
        .iter()
        .map(|(tag, &total)| {
            let unsolved = counters
                .participated_unsolved()
                .get(tag)
                .copied()
                .unwrap_or(0);
            RatioRow {
                tag: tag.clone(),
                ratio: unsolved as f64 / total as f64,
                unsolved_count: unsolved,
                total_count: total,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    rows
}

/// Tag frequency across all analyzed contests, rarest tags first.
pub fn frequency_rows(counters: &TagCounters) -> Vec<(String, u64)> {
    let mut rows: Vec<(String, u64)> = counters
        .all()
        .iter()
        .map(|(tag, &count)| (tag.clone(), count))
        .collect();
    rows.sort_by(|a, b| a.1.cmp(&b.1));
    rows
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render the full report.
pub fn render(counters: &TagCounters) -> String {
    let mut out = String::new();

    out.push_str("# Unsolved statistics:\n");
    if !counters.has_participation() {
        out.push_str(NO_PARTICIPATION_HINT);
        out.push('\n');
    } else {
        let mut table = base_table();
        table.set_header(vec![
            header_cell("Tag"),
            header_cell("Ratio"),
            header_cell("Unsolved"),
            header_cell("Total"),
        ]);
        for row in ratio_rows(counters) {
            table.add_row(vec![
                Cell::new(&row.tag),
                Cell::new(format!("{:.3}", row.ratio)),
                Cell::new(row.unsolved_count.to_string()),
                Cell::new(row.total_count.to_string()),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push('\n');
    out.push_str("# Tags statistics:\n");
    let mut table = base_table();
    table.set_header(vec![header_cell("Tag"), header_cell("Count")]);
    for (tag, count) in frequency_rows(counters) {
        table.add_row(vec![Cell::new(&tag), Cell::new(count.to_string())]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    out
}
