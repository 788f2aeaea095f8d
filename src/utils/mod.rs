pub mod constants;
pub mod progress;
pub mod sampling;

pub use constants::*;
pub use progress::ProgressReporter;
pub use sampling::{evenly_spaced, head};
