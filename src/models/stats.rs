use serde::{Deserialize, Serialize};

use crate::models::{
    driver::Driver,
    race::{Finish, RaceId},
};

/// One line of a driver's season: what happened at a single race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceSummary {
    #[serde(rename = "raceId")]
    pub race_id: RaceId,
    pub race: String,
    pub points: u32,
    pub qualifying: Option<u32>,
    pub sprint: Option<Finish>,
    pub feature: Option<Finish>,
    #[serde(rename = "fastestLap")]
    pub fastest_lap: bool,
}

/// Season totals for one driver. Recomputed from the snapshot on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStats {
    pub total_points: u32,
    pub wins: u32,
    pub podiums: u32,
    pub poles: u32,
    pub fastest_laps: u32,
    pub dnfs: u32,
    pub best_finish: Option<u32>,
    pub worst_finish: Option<u32>,
    /// Mean numeric feature finish, one decimal. `None` until the driver is classified.
    pub average_position: Option<f64>,
    pub race_results: Vec<RaceSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub position: u32,
    #[serde(flatten)]
    pub driver: Driver,
    #[serde(flatten)]
    pub stats: DriverStats,
}
