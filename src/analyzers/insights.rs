use serde::Serialize;

use crate::analyzers::Aggregator;
use crate::models::{CombinedDataset, Country, Metric};
use crate::utils::constants::REFERENCE_TEMP_C;

/// Ranked cross-country observations derived from the combined dataset.
///
/// Recomputed on every request; reflects the dataset it was generated from
/// exactly and is never cached.
#[derive(Debug, Clone, Serialize)]
pub struct InsightSet {
    /// Countries ordered by mean GHI, descending. Countries absent from the
    /// computed means (failed load) or with a non-finite mean rank with 0.0,
    /// matching the display substitution rule.
    pub ghi_ranking: Vec<(Country, f64)>,
    /// Country with the highest mean DNI, same substitution rule.
    pub best_dni: (Country, f64),
    /// Country whose mean ambient temperature is closest to the 25 °C
    /// reference, with that mean. Absent when no country has a finite mean.
    pub optimal_temperature: Option<(Country, f64)>,
}

impl InsightSet {
    pub fn generate(dataset: &CombinedDataset) -> Self {
        let aggregator = Aggregator::new();
        let ghi_means = aggregator.metric_means(dataset, Metric::Ghi);
        let dni_means = aggregator.metric_means(dataset, Metric::Dni);
        let tamb_means = aggregator.metric_means(dataset, Metric::Tamb);

        // Genuine sort by computed mean, descending; ties and substituted
        // zeros fall back to country order.
        let mut ghi_ranking: Vec<(Country, f64)> = Country::ALL
            .into_iter()
            .map(|country| (country, displayable(ghi_means.get(&country))))
            .collect();
        ghi_ranking.sort_by(|(ca, va), (cb, vb)| vb.total_cmp(va).then(ca.cmp(cb)));

        let mut dni_ranked: Vec<(Country, f64)> = Country::ALL
            .into_iter()
            .map(|country| (country, displayable(dni_means.get(&country))))
            .collect();
        dni_ranked.sort_by(|(ca, va), (cb, vb)| vb.total_cmp(va).then(ca.cmp(cb)));
        let best_dni = dni_ranked[0];

        // Closest mean to the reference; ties break on country order, which
        // is alphabetical.
        let optimal_temperature = tamb_means
            .into_iter()
            .filter(|(_, mean)| mean.is_finite())
            .min_by(|(ca, ma), (cb, mb)| {
                (ma - REFERENCE_TEMP_C)
                    .abs()
                    .total_cmp(&(mb - REFERENCE_TEMP_C).abs())
                    .then(ca.cmp(cb))
            });

        Self {
            ghi_ranking,
            best_dni,
            optimal_temperature,
        }
    }

    /// Country with the highest mean GHI, the head of the ranking.
    pub fn highest_ghi(&self) -> (Country, f64) {
        self.ghi_ranking[0]
    }

    pub fn render(&self) -> String {
        let mut out = String::from("SOLAR POTENTIAL RANKING:\n");
        for (position, (country, mean)) in self.ghi_ranking.iter().enumerate() {
            out.push_str(&format!(
                "{}. {}: Avg GHI {:.2} W/m²\n",
                position + 1,
                country,
                mean
            ));
        }

        let (top_country, top_ghi) = self.highest_ghi();
        out.push_str("\nTOP INSIGHTS:\n");
        out.push_str(&format!(
            "1. Highest Solar Potential: {} ({:.2} W/m² GHI)\n",
            top_country, top_ghi
        ));
        out.push_str(&format!(
            "2. Best DNI: {} ({:.2} W/m²)\n",
            self.best_dni.0, self.best_dni.1
        ));
        match self.optimal_temperature {
            Some((country, mean)) => out.push_str(&format!(
                "3. Optimal Temperature: {} ({:.2}°C)\n",
                country, mean
            )),
            None => out.push_str("3. Optimal Temperature: no valid measurements\n"),
        }

        out
    }
}

/// Display substitution for a missing or non-finite mean.
fn displayable(mean: Option<&f64>) -> f64 {
    match mean {
        Some(value) if value.is_finite() => *value,
        _ => 0.0,
    }
}
