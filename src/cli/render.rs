//! Plain-text layouts for the dashboard, the listing and the resume chart.
//!
//! Nothing here prints or colors; commands decide that.

use gofinances_core::{HighlightCard, HighlightKind, Locale, ResumeView, TransactionRow};
use gofinances_domain::Catalog;

const BAR_GLYPH: char = '█';
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;
/// Columns taken by the name, amount and percent cells of a resume row.
const RESUME_TEXT_WIDTH: usize = 40;

pub fn card_title(kind: HighlightKind, locale: Locale) -> &'static str {
    match (kind, locale) {
        (HighlightKind::Up, Locale::PtBr) => "Entradas",
        (HighlightKind::Down, Locale::PtBr) => "Saídas",
        (HighlightKind::Up, Locale::EnUs) => "Income",
        (HighlightKind::Down, Locale::EnUs) => "Outcome",
        (HighlightKind::Total, _) => "Total",
    }
}

pub fn highlight_line(card: &HighlightCard, locale: Locale) -> String {
    format!(
        "{:<10} {:>14}  {}",
        card_title(card.kind, locale),
        card.amount,
        card.last_transaction
    )
}

pub fn listing_line(row: &TransactionRow) -> String {
    let line = format!(
        "{:<8}  {:<24}  {:<14}  {:>16}",
        row.date, row.title, row.category, row.amount
    );
    line.trim_end().to_string()
}

/// Bar length for `percent` when 100% spans `bar_width` glyphs.
pub fn bar_length(percent: f64, bar_width: usize) -> usize {
    let length = (percent / 100.0 * bar_width as f64).round();
    if length.is_finite() && length > 0.0 {
        (length as usize).min(bar_width)
    } else {
        0
    }
}

pub fn bar_width_for(terminal_width: usize) -> usize {
    terminal_width
        .saturating_sub(RESUME_TEXT_WIDTH)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

/// Category rows with proportional bars, then the period total.
pub fn resume_lines(view: &ResumeView, terminal_width: usize) -> Vec<String> {
    let bar_width = bar_width_for(terminal_width);
    let mut lines: Vec<String> = view
        .rows
        .iter()
        .map(|row| {
            let bar: String = std::iter::repeat(BAR_GLYPH)
                .take(bar_length(row.percent, bar_width))
                .collect();
            format!(
                "{:<14} {:>14} {:>7}  {}",
                row.name, row.total_formatted, row.percent_label, bar
            )
            .trim_end()
            .to_string()
        })
        .collect();
    lines.push(format!("{:<14} {:>14}", "Total", view.total_formatted));
    lines
}

pub fn catalog_lines(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|category| {
            format!(
                "{:<10} {:<14} {:<14} {}",
                category.key, category.name, category.icon, category.color
            )
        })
        .collect()
}
