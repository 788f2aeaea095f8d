use std::collections::BTreeMap;

use crate::models::{Country, Metric, SolarRecord};

/// One country's measurement records, immutable after loading.
#[derive(Debug, Clone)]
pub struct CountryDataset {
    pub country: Country,
    records: Vec<SolarRecord>,
}

impl CountryDataset {
    pub fn new(country: Country, records: Vec<SolarRecord>) -> Self {
        Self { country, records }
    }

    pub fn records(&self) -> &[SolarRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean of a metric over non-missing values; NaN when none exist.
    pub fn metric_mean(&self, metric: Metric) -> f64 {
        let values: Vec<f64> = self.records.iter().filter_map(|r| r.value(metric)).collect();
        if values.is_empty() {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    }
}

/// Concatenation of all loaded per-country datasets.
///
/// Per-country insertion order is preserved for display sampling; aggregate
/// computations do not depend on it.
#[derive(Debug, Clone, Default)]
pub struct CombinedDataset {
    records: Vec<SolarRecord>,
}

impl CombinedDataset {
    pub fn from_datasets<'a>(datasets: impl IntoIterator<Item = &'a CountryDataset>) -> Self {
        let mut records = Vec::new();
        for dataset in datasets {
            records.extend_from_slice(dataset.records());
        }
        Self { records }
    }

    pub fn records(&self) -> &[SolarRecord] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Countries present in the dataset, in `Country` order.
    pub fn countries(&self) -> Vec<Country> {
        Country::ALL
            .into_iter()
            .filter(|c| self.records.iter().any(|r| r.country == *c))
            .collect()
    }

    /// Overall mean of a metric over non-missing values; NaN when none exist.
    pub fn metric_mean(&self, metric: Metric) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for record in &self.records {
            if let Some(value) = record.value(metric) {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        }
    }
}

/// Per-country outcome of a load pass.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Successfully loaded countries with their record counts.
    pub loaded: Vec<(Country, usize)>,
    /// Countries that failed to load, with the underlying cause.
    pub failed: Vec<(Country, String)>,
}

impl LoadReport {
    pub fn total_records(&self) -> usize {
        self.loaded.iter().map(|(_, count)| count).sum()
    }

    pub fn summary(&self) -> String {
        format!(
            "Loaded {} countries ({} records), {} failed",
            self.loaded.len(),
            self.total_records(),
            self.failed.len()
        )
    }
}

/// Everything a load pass produces: the combined dataset, the per-country
/// datasets, and the load report.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub combined: CombinedDataset,
    pub per_country: BTreeMap<Country, CountryDataset>,
    pub report: LoadReport,
}

impl LoadOutcome {
    pub fn dataset(&self, country: Country) -> Option<&CountryDataset> {
        self.per_country.get(&country)
    }
}
