pub mod analysis;
pub mod chart;
pub mod driver;
pub mod error;
pub mod race;
pub mod snapshot;
pub mod stats;
