use serde::{Deserialize, Serialize};

use crate::models::driver::Driver;

/// A driver together with the number of places gained or lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    pub driver: Driver,
    pub positions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceAnalysis {
    pub winner: Option<Driver>,
    pub pole_position: Option<Driver>,
    pub fastest_lap: Option<Driver>,
    pub best_recovery: Option<PositionChange>,
    pub biggest_loser: Option<PositionChange>,
    pub dnfs: Vec<Driver>,
    /// Pole, win and fastest lap by the same driver.
    pub perfect_weekend: Option<Driver>,
}
