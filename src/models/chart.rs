use serde::{Deserialize, Serialize};

use crate::models::driver::Driver;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionSeries {
    pub driver: Driver,
    pub cumulative_points: Vec<u32>,
}

/// Points after each race for the leading drivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipEvolution {
    pub labels: Vec<String>,
    pub series: Vec<EvolutionSeries>,
}

/// Driver metrics scaled to 0-100 against the rest of the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceProfile {
    pub driver: Driver,
    pub points: f64,
    pub wins: f64,
    pub podiums: f64,
    pub poles: f64,
    pub fastest_laps: f64,
    pub consistency: f64,
}
