use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement channels recorded at every station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Global horizontal irradiance
    Ghi,
    /// Direct normal irradiance
    Dni,
    /// Diffuse horizontal irradiance
    Dhi,
    /// Ambient air temperature
    Tamb,
}

impl Metric {
    /// The irradiance metrics that appear in the comparative summary table.
    pub const IRRADIANCE: [Metric; 3] = [Metric::Ghi, Metric::Dni, Metric::Dhi];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Ghi => "GHI",
            Metric::Dni => "DNI",
            Metric::Dhi => "DHI",
            Metric::Tamb => "Tamb",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Ghi | Metric::Dni | Metric::Dhi => "W/m²",
            Metric::Tamb => "°C",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
