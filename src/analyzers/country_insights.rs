use serde::Serialize;

use crate::models::{Country, CountryDataset, Metric};
use crate::utils::constants::NO_DATA_MESSAGE;

/// Key figures for a single country's dataset.
#[derive(Debug, Clone, Serialize)]
pub struct CountryInsights {
    pub country: Country,
    pub avg_ghi: f64,
    pub avg_dni: f64,
    pub avg_dhi: f64,
    pub avg_tamb: f64,
    /// Hour of day (0-23) with the highest average GHI; absent when the
    /// dataset has no GHI values at all. Ties resolve to the earliest hour.
    pub peak_hour: Option<u32>,
}

impl CountryInsights {
    /// Compute insights for one country. Returns `None` for an empty
    /// dataset; render the placeholder via [`render_or_placeholder`].
    pub fn generate(dataset: &CountryDataset) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }

        Some(Self {
            country: dataset.country,
            avg_ghi: dataset.metric_mean(Metric::Ghi),
            avg_dni: dataset.metric_mean(Metric::Dni),
            avg_dhi: dataset.metric_mean(Metric::Dhi),
            avg_tamb: dataset.metric_mean(Metric::Tamb),
            peak_hour: peak_ghi_hour(dataset),
        })
    }

    pub fn render(&self) -> String {
        let peak = match self.peak_hour {
            Some(hour) => format!("{}:00", hour),
            None => "no GHI measurements".to_string(),
        };

        format!(
            "{} Key Insights\n\
             - Avg GHI: {:.2} W/m²\n\
             - Avg DNI: {:.2} W/m²\n\
             - Avg DHI: {:.2} W/m²\n\
             - Avg Temp: {:.2} °C\n\
             - Peak Hour: {}\n",
            self.country, self.avg_ghi, self.avg_dni, self.avg_dhi, self.avg_tamb, peak
        )
    }
}

/// Insight card for a dataset that may be missing or empty; the fixed
/// placeholder is returned without touching any statistics.
pub fn render_or_placeholder(dataset: Option<&CountryDataset>) -> String {
    dataset
        .and_then(CountryInsights::generate)
        .map(|insights| insights.render())
        .unwrap_or_else(|| NO_DATA_MESSAGE.to_string())
}

/// Hour (0-23) whose average GHI is highest. Hours without any non-missing
/// GHI are skipped; ties resolve to the earliest hour in ascending order.
fn peak_ghi_hour(dataset: &CountryDataset) -> Option<u32> {
    let mut sums = [(0.0f64, 0usize); 24];
    for record in dataset.records() {
        if let Some(ghi) = record.value(Metric::Ghi) {
            let (sum, count) = &mut sums[record.hour() as usize];
            *sum += ghi;
            *count += 1;
        }
    }

    let mut best: Option<(u32, f64)> = None;
    for (hour, (sum, count)) in sums.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let avg = sum / *count as f64;
        // Strict comparison keeps the earliest hour on ties
        if best.map_or(true, |(_, best_avg)| avg > best_avg) {
            best = Some((hour as u32, avg));
        }
    }

    best.map(|(hour, _)| hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SolarRecord;
    use chrono::NaiveDate;

    fn record(hour: u32, ghi: Option<f64>, tamb: Option<f64>) -> SolarRecord {
        let timestamp = NaiveDate::from_ymd_opt(2021, 8, 9)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        let mut record = SolarRecord::new(timestamp, Country::Benin);
        record.ghi = ghi;
        record.dni = Some(200.0);
        record.dhi = Some(100.0);
        record.tamb = tamb;
        record
    }

    #[test]
    fn test_peak_hour_selects_highest_average() {
        // Hour 12 uniquely highest average GHI
        let dataset = CountryDataset::new(
            Country::Benin,
            vec![
                record(9, Some(300.0), Some(26.0)),
                record(12, Some(800.0), Some(28.0)),
                record(12, Some(900.0), Some(28.5)),
                record(15, Some(400.0), Some(27.0)),
            ],
        );

        let insights = CountryInsights::generate(&dataset).unwrap();
        assert_eq!(insights.peak_hour, Some(12));
        assert_eq!(insights.avg_ghi, 600.0);
        assert_eq!(insights.avg_tamb, 27.375);
    }

    #[test]
    fn test_peak_hour_tie_resolves_to_earliest() {
        let dataset = CountryDataset::new(
            Country::Benin,
            vec![record(10, Some(500.0), None), record(14, Some(500.0), None)],
        );

        let insights = CountryInsights::generate(&dataset).unwrap();
        assert_eq!(insights.peak_hour, Some(10));
    }

    #[test]
    fn test_no_ghi_values_leaves_peak_absent() {
        let dataset = CountryDataset::new(
            Country::Benin,
            vec![record(10, None, Some(25.0)), record(11, None, Some(26.0))],
        );

        let insights = CountryInsights::generate(&dataset).unwrap();
        assert_eq!(insights.peak_hour, None);
        assert!(insights.avg_ghi.is_nan());
        assert_eq!(insights.avg_tamb, 25.5);
    }

    #[test]
    fn test_empty_dataset_renders_placeholder() {
        let dataset = CountryDataset::new(Country::Togo, vec![]);
        assert!(CountryInsights::generate(&dataset).is_none());
        assert_eq!(render_or_placeholder(Some(&dataset)), NO_DATA_MESSAGE);
        assert_eq!(render_or_placeholder(None), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_render_card() {
        let dataset = CountryDataset::new(
            Country::Benin,
            vec![record(12, Some(450.0), Some(27.0))],
        );
        let text = render_or_placeholder(Some(&dataset));
        assert!(text.contains("Benin Key Insights"));
        assert!(text.contains("- Avg GHI: 450.00 W/m²"));
        assert!(text.contains("- Peak Hour: 12:00"));
    }
}
