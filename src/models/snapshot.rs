use serde::{Deserialize, Serialize};

use crate::models::{
    driver::Driver,
    race::{Race, ResultsByRace},
};

/// Everything the engine needs for one computation. Callers send a complete,
/// consistent copy with each request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub results: ResultsByRace,
}

impl ChampionshipSnapshot {
    pub fn driver(&self, driver_id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == driver_id)
    }

    pub fn race(&self, race_id: &str) -> Option<&Race> {
        self.races.iter().find(|race| race.id == race_id)
    }
}
