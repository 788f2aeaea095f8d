use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Countries covered by the measurement campaign.
///
/// Declaration order is alphabetical by display label; `Ord` follows it and
/// is used as the deterministic tie-break wherever rankings can tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    Benin,
    SierraLeone,
    Togo,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Benin, Country::SierraLeone, Country::Togo];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Benin => "Benin",
            Country::SierraLeone => "Sierra Leone",
            Country::Togo => "Togo",
        }
    }

    /// Default dataset file name for this country.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Country::Benin => "benin.csv",
            Country::SierraLeone => "sierraleone.csv",
            Country::Togo => "togo.csv",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "benin" => Ok(Country::Benin),
            "sierra leone" | "sierraleone" => Ok(Country::SierraLeone),
            "togo" => Ok(Country::Togo),
            _ => Err(AnalysisError::UnknownCountry(s.to_string())),
        }
    }
}
