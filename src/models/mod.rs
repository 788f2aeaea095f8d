pub mod country;
pub mod dataset;
pub mod metric;
pub mod record;

pub use country::Country;
pub use dataset::{CombinedDataset, CountryDataset, LoadOutcome, LoadReport};
pub use metric::Metric;
pub use record::SolarRecord;
