//! Horizontal bar chart of hours per day.

use crate::models::DayTotal;
use crate::utils::formatting::hours_readable;

/// One line per day: `01/01/2024 │██████████ 5.5h`.
///
/// The longest bar is `width` cells; the others are scaled against it.
/// Any non-zero total gets at least one cell.
pub fn render_bar_chart(totals: &[DayTotal], width: usize, bar: &str) -> String {
    let max = totals
        .iter()
        .map(|t| t.total_hours)
        .fold(0.0_f64, f64::max);

    if totals.is_empty() || max <= 0.0 {
        return String::new();
    }

    totals
        .iter()
        .map(|t| {
            let cells = ((t.total_hours / max) * width as f64).round() as usize;
            let cells = if t.total_hours > 0.0 { cells.max(1) } else { 0 };
            format!(
                "{} │{} {}",
                t.label(),
                bar.repeat(cells),
                hours_readable(t.total_hours)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
