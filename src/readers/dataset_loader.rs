use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{error, info};

use crate::error::{AnalysisError, Result};
use crate::models::{CombinedDataset, Country, LoadOutcome, LoadReport};
use crate::readers::SolarCsvReader;

/// Loads every configured country file and concatenates the results.
///
/// A failure to load one country is recovered locally: the failure is logged
/// and recorded in the report, and loading continues with the remaining
/// countries. Only a load that produces zero countries is an error.
pub struct DatasetLoader;

impl DatasetLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load all sources. File reads run on blocking tasks and are joined in
    /// the given order, so notifications and the report are deterministic.
    pub async fn load_all(&self, sources: Vec<(Country, PathBuf)>) -> Result<LoadOutcome> {
        let handles: Vec<_> = sources
            .into_iter()
            .map(|(country, path)| {
                let handle = tokio::task::spawn_blocking(move || {
                    SolarCsvReader::new().read_file(&path, country)
                });
                (country, handle)
            })
            .collect();

        let mut per_country = BTreeMap::new();
        let mut report = LoadReport::default();

        for (country, handle) in handles {
            match handle.await? {
                Ok(dataset) => {
                    info!(country = %country, records = dataset.len(), "loaded dataset");
                    report.loaded.push((country, dataset.len()));
                    per_country.insert(country, dataset);
                }
                Err(e) => {
                    error!(country = %country, cause = %e, "failed to load dataset");
                    report.failed.push((country, e.to_string()));
                }
            }
        }

        if per_country.is_empty() {
            return Err(AnalysisError::NoDataLoaded);
        }

        let combined = CombinedDataset::from_datasets(per_country.values());
        Ok(LoadOutcome {
            combined,
            per_country,
            report,
        })
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}
