//! Text rendering surface.
//!
//! Pure consumers of the core outputs: every view takes plain data computed
//! upstream and returns a formatted string. No view computes statistics
//! beyond bounded display sampling.

pub mod comparison;
pub mod country;
pub mod observations;
pub mod overview;

pub use comparison::render_comparison;
pub use country::render_country;
pub use observations::render_observations;
pub use overview::render_overview;
