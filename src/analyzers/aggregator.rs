use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{CombinedDataset, Country, Metric};

/// Descriptive statistics for one (country, metric) cell, computed over
/// non-missing values only.
///
/// A cell with zero non-missing values carries NaN throughout; a single
/// value leaves the sample standard deviation undefined (NaN). NaN is
/// preserved rather than coerced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl MetricSummary {
    fn from_values(mut values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self {
                mean: f64::NAN,
                median: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        values.sort_by(f64::total_cmp);
        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            values[n / 2]
        } else {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        };
        let std_dev = if n >= 2 {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            f64::NAN
        };

        Self {
            mean,
            median,
            std_dev,
            min: values[0],
            max: values[n - 1],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.mean.is_finite()
            && self.median.is_finite()
            && self.std_dev.is_finite()
            && self.min.is_finite()
            && self.max.is_finite()
    }
}

/// Per-country, per-metric summary statistics, pivoted for display as
/// country rows with one column-group per statistic.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTable {
    cells: BTreeMap<Country, BTreeMap<Metric, MetricSummary>>,
}

impl SummaryTable {
    pub fn get(&self, country: Country, metric: Metric) -> Option<&MetricSummary> {
        self.cells.get(&country).and_then(|row| row.get(&metric))
    }

    /// Countries present, in `Country` order.
    pub fn countries(&self) -> Vec<Country> {
        self.cells.keys().copied().collect()
    }

    pub fn metrics(&self) -> [Metric; 3] {
        Metric::IRRADIANCE
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Computes comparative statistics over a combined dataset. Pure: the
/// dataset is never mutated.
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }

    /// One `MetricSummary` per (country, metric) pair present in the input,
    /// for the three irradiance metrics.
    pub fn summary_table(&self, dataset: &CombinedDataset) -> SummaryTable {
        let mut groups: BTreeMap<(Country, Metric), Vec<f64>> = BTreeMap::new();

        for country in dataset.countries() {
            for metric in Metric::IRRADIANCE {
                groups.insert((country, metric), Vec::new());
            }
        }

        for record in dataset.records() {
            for metric in Metric::IRRADIANCE {
                if let Some(value) = record.value(metric) {
                    if let Some(values) = groups.get_mut(&(record.country, metric)) {
                        values.push(value);
                    }
                }
            }
        }

        let mut cells: BTreeMap<Country, BTreeMap<Metric, MetricSummary>> = BTreeMap::new();
        for ((country, metric), values) in groups {
            cells
                .entry(country)
                .or_default()
                .insert(metric, MetricSummary::from_values(values));
        }

        SummaryTable { cells }
    }

    /// Per-country mean of one metric over non-missing values; NaN when a
    /// country has none.
    pub fn metric_means(
        &self,
        dataset: &CombinedDataset,
        metric: Metric,
    ) -> BTreeMap<Country, f64> {
        let mut sums: BTreeMap<Country, (f64, usize)> = BTreeMap::new();
        for country in dataset.countries() {
            sums.insert(country, (0.0, 0));
        }

        for record in dataset.records() {
            if let Some(value) = record.value(metric) {
                if let Some((sum, count)) = sums.get_mut(&record.country) {
                    *sum += value;
                    *count += 1;
                }
            }
        }

        sums.into_iter()
            .map(|(country, (sum, count))| {
                let mean = if count == 0 { f64::NAN } else { sum / count as f64 };
                (country, mean)
            })
            .collect()
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
