use std::fmt::Write;

use crate::analyzers::country_insights::render_or_placeholder;
use crate::models::{CountryDataset, Metric};
use crate::utils::constants::TREND_SAMPLE_SIZE;
use crate::utils::sampling::head;

/// Individual country view: the insight card plus an hourly GHI profile
/// derived from the first `TREND_SAMPLE_SIZE` records.
pub fn render_country(dataset: Option<&CountryDataset>) -> String {
    let mut out = String::from("=== Individual Country ===\n");
    out.push_str(&render_or_placeholder(dataset));

    let Some(dataset) = dataset.filter(|d| !d.is_empty()) else {
        return out;
    };

    let sample = head(dataset.records(), TREND_SAMPLE_SIZE);
    let mut sums = [(0.0f64, 0usize); 24];
    for record in sample {
        if let Some(ghi) = record.value(Metric::Ghi) {
            let (sum, count) = &mut sums[record.hour() as usize];
            *sum += ghi;
            *count += 1;
        }
    }

    writeln!(out, "\nGHI trend (first {} records):", sample.len()).ok();
    for (hour, (sum, count)) in sums.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        writeln!(out, "{:>4}:00  {:>10.2} W/m²", hour, sum / *count as f64).ok();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, SolarRecord};
    use crate::utils::constants::NO_DATA_MESSAGE;
    use chrono::NaiveDate;

    #[test]
    fn test_country_view_with_data() {
        let timestamp = NaiveDate::from_ymd_opt(2021, 8, 9)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap();
        let mut record = SolarRecord::new(timestamp, Country::Togo);
        record.ghi = Some(610.0);

        let dataset = CountryDataset::new(Country::Togo, vec![record]);
        let text = render_country(Some(&dataset));
        assert!(text.contains("Togo Key Insights"));
        assert!(text.contains("GHI trend (first 1 records):"));
        assert!(text.contains("  13:00"));
    }

    #[test]
    fn test_country_view_without_data() {
        let text = render_country(None);
        assert!(text.contains(NO_DATA_MESSAGE));
        assert!(!text.contains("GHI trend"));
    }
}
