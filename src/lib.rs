pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod readers;
pub mod store;
pub mod utils;
pub mod views;

pub use error::{AnalysisError, Result};
