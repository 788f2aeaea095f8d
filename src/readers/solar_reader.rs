use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{AnalysisError, Result};
use crate::models::{Country, CountryDataset, SolarRecord};
use crate::utils::constants::TIMESTAMP_FORMATS;

/// Raw CSV row as it appears on disk. Empty measurement cells deserialize to
/// `None` and are kept as missing, never coerced to zero.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "GHI")]
    ghi: Option<f64>,
    #[serde(rename = "DNI")]
    dni: Option<f64>,
    #[serde(rename = "DHI")]
    dhi: Option<f64>,
    #[serde(rename = "Tamb")]
    tamb: Option<f64>,
}

/// Reads one country's CSV file into a `CountryDataset`, tagging every
/// record with the country it belongs to.
pub struct SolarCsvReader;

impl SolarCsvReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_file(&self, path: &Path, country: Country) -> Result<CountryDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let row: RawRow = row?;
            records.push(self.into_record(row, country, path)?);
        }

        Ok(CountryDataset::new(country, records))
    }

    fn into_record(&self, row: RawRow, country: Country, path: &Path) -> Result<SolarRecord> {
        let timestamp = parse_timestamp(&row.timestamp).ok_or_else(|| {
            AnalysisError::TimestampParse {
                value: row.timestamp.clone(),
                path: path.display().to_string(),
            }
        })?;

        let mut record = SolarRecord::new(timestamp, country);
        record.ghi = row.ghi;
        record.dni = row.dni;
        record.dhi = row.dhi;
        record.tamb = row.tamb;
        Ok(record)
    }
}

impl Default for SolarCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a timestamp, trying each accepted format in order.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
