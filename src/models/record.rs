use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{Country, Metric};

/// One timestamped measurement row, tagged with its source country.
///
/// Missing measurements stay `None`; they are excluded from statistics
/// rather than treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarRecord {
    pub timestamp: NaiveDateTime,
    pub country: Country,
    pub ghi: Option<f64>,
    pub dni: Option<f64>,
    pub dhi: Option<f64>,
    pub tamb: Option<f64>,
}

impl SolarRecord {
    pub fn new(timestamp: NaiveDateTime, country: Country) -> Self {
        Self {
            timestamp,
            country,
            ghi: None,
            dni: None,
            dhi: None,
            tamb: None,
        }
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Ghi => self.ghi,
            Metric::Dni => self.dni,
            Metric::Dhi => self.dhi,
            Metric::Tamb => self.tamb,
        }
    }

    /// Hour of day (0-23) extracted from the timestamp.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 8, 9)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_value_accessor() {
        let mut record = SolarRecord::new(timestamp(12), Country::Benin);
        record.ghi = Some(450.5);
        record.tamb = Some(27.1);

        assert_eq!(record.value(Metric::Ghi), Some(450.5));
        assert_eq!(record.value(Metric::Dni), None);
        assert_eq!(record.value(Metric::Tamb), Some(27.1));
    }

    #[test]
    fn test_hour_extraction() {
        let record = SolarRecord::new(timestamp(17), Country::Togo);
        assert_eq!(record.hour(), 17);
    }
}
