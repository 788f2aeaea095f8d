pub mod aggregator;
pub mod country_insights;
pub mod insights;

pub use aggregator::{Aggregator, MetricSummary, SummaryTable};
pub use country_insights::CountryInsights;
pub use insights::InsightSet;
