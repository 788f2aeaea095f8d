use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::models::Country;
use crate::utils::constants::{CONFIG_ENV_PREFIX, DEFAULT_DATA_DIR};

/// Where to find the per-country dataset files.
///
/// Layered: built-in defaults, then an optional configuration file, then
/// `SOLAR_*` environment variables (e.g. `SOLAR_DATA_DIR`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub benin_file: String,
    pub sierra_leone_file: String,
    pub togo_file: String,
}

impl AppConfig {
    /// Load configuration, optionally merging a config file over defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("benin_file", Country::Benin.default_file_name())?
            .set_default("sierra_leone_file", Country::SierraLeone.default_file_name())?
            .set_default("togo_file", Country::Togo.default_file_name())?;

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(CONFIG_ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Defaults rooted at an explicit data directory.
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            benin_file: Country::Benin.default_file_name().to_string(),
            sierra_leone_file: Country::SierraLeone.default_file_name().to_string(),
            togo_file: Country::Togo.default_file_name().to_string(),
        }
    }

    pub fn file_for(&self, country: Country) -> PathBuf {
        let name = match country {
            Country::Benin => &self.benin_file,
            Country::SierraLeone => &self.sierra_leone_file,
            Country::Togo => &self.togo_file,
        };
        self.data_dir.join(name)
    }

    /// Country/path pairs in fixed country order, as the loader consumes them.
    pub fn country_files(&self) -> Vec<(Country, PathBuf)> {
        Country::ALL
            .into_iter()
            .map(|country| (country, self.file_for(country)))
            .collect()
    }
}
