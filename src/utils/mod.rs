pub mod charts;
pub mod config;
pub mod driver_stats;
pub mod export;
pub mod points;
pub mod race_analysis;
pub mod race_utils;
pub mod standings;
pub mod state;
