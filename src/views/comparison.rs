use std::fmt::Write;

use crate::analyzers::SummaryTable;

/// Pivoted summary statistics: one block per metric, country rows with the
/// five statistic columns.
pub fn render_comparison(table: &SummaryTable) -> String {
    let mut out = String::from("=== Country Comparison ===\n");

    for metric in table.metrics() {
        writeln!(out, "\n{} ({})", metric, metric.unit()).ok();
        writeln!(
            out,
            "{:<14} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "Country", "Mean", "Median", "Std Dev", "Min", "Max"
        )
        .ok();

        for country in table.countries() {
            if let Some(summary) = table.get(country, metric) {
                writeln!(
                    out,
                    "{:<14} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
                    country.label(),
                    summary.mean,
                    summary.median,
                    summary.std_dev,
                    summary.min,
                    summary.max
                )
                .ok();
            }
        }
    }

    out
}
