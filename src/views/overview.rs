use std::fmt::Write;

use crate::models::{LoadOutcome, Metric};
use crate::utils::constants::OVERVIEW_SAMPLE_SIZE;
use crate::utils::sampling::evenly_spaced;

/// Dataset overview: headline figures plus an hourly irradiance profile
/// drawn from a bounded, evenly spaced subsample of the combined dataset.
pub fn render_overview(outcome: &LoadOutcome) -> String {
    let combined = &outcome.combined;
    let mut out = String::from("=== Overview ===\n");

    writeln!(out, "Total Records:      {}", combined.record_count()).ok();
    writeln!(out, "Countries Analyzed: {}", outcome.per_country.len()).ok();
    writeln!(
        out,
        "Overall Avg GHI:    {:.2} W/m²",
        combined.metric_mean(Metric::Ghi)
    )
    .ok();

    for (country, count) in &outcome.report.loaded {
        writeln!(out, "  {}: {} records", country, count).ok();
    }
    for (country, cause) in &outcome.report.failed {
        writeln!(out, "  {}: load failed ({})", country, cause).ok();
    }

    let sample = evenly_spaced(combined.records(), OVERVIEW_SAMPLE_SIZE);
    if sample.is_empty() {
        return out;
    }

    // Hourly GHI/DNI means over the display sample only; missing values are
    // excluded per metric, never averaged in as zeros
    let mut ghi_sums = [(0.0f64, 0usize); 24];
    let mut dni_sums = [(0.0f64, 0usize); 24];
    for record in &sample {
        let hour = record.hour() as usize;
        if let Some(ghi) = record.ghi {
            ghi_sums[hour].0 += ghi;
            ghi_sums[hour].1 += 1;
        }
        if let Some(dni) = record.dni {
            dni_sums[hour].0 += dni;
            dni_sums[hour].1 += 1;
        }
    }

    writeln!(out, "\nHourly profile (sampled, {} rows):", sample.len()).ok();
    writeln!(out, "{:>4}  {:>10}  {:>10}", "Hour", "Avg GHI", "Avg DNI").ok();
    for hour in 0..24 {
        let (ghi_sum, ghi_count) = ghi_sums[hour];
        let (dni_sum, dni_count) = dni_sums[hour];
        if ghi_count == 0 && dni_count == 0 {
            continue;
        }
        writeln!(
            out,
            "{:>4}  {:>10.2}  {:>10.2}",
            hour,
            mean_or_nan(ghi_sum, ghi_count),
            mean_or_nan(dni_sum, dni_count)
        )
        .ok();
    }

    out
}

fn mean_or_nan(sum: f64, count: usize) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
