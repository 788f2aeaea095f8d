pub mod dataset_loader;
pub mod solar_reader;

pub use dataset_loader::DatasetLoader;
pub use solar_reader::SolarCsvReader;
