/// Reference ambient temperature for the "optimal temperature" insight (°C).
pub const REFERENCE_TEMP_C: f64 = 25.0;

/// Upper bound on rows sampled for the overview listing.
pub const OVERVIEW_SAMPLE_SIZE: usize = 5000;

/// Upper bound on rows used for the per-country GHI trend.
pub const TREND_SAMPLE_SIZE: usize = 1000;

/// Accepted timestamp formats, tried in order.
pub const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Configuration defaults
pub const DEFAULT_DATA_DIR: &str = "data";
pub const CONFIG_ENV_PREFIX: &str = "SOLAR";

/// Placeholder shown when a per-country insight has no data to work with.
pub const NO_DATA_MESSAGE: &str = "No data available.";
