use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    analysis::{PositionChange, RaceAnalysis},
    driver::Driver,
    race::{Race, ResultsByRace},
};

/// Narrative facts for a single race weekend.
///
/// Results are visited in ascending driver-id order and the first match wins
/// wherever the data names more than one driver (two winners, two fastest
/// laps, equal position changes). Results for drivers missing from `drivers`
/// are ignored. Returns `None` if the race has no results at all.
pub fn analyze_race(
    race: &Race,
    results: &ResultsByRace,
    drivers: &[Driver],
) -> Option<RaceAnalysis> {
    let entries = results.get(&race.id)?;
    let lookup: HashMap<&str, &Driver> = drivers
        .iter()
        .map(|driver| (driver.id.as_str(), driver))
        .collect();

    let mut analysis = RaceAnalysis::default();
    let mut best_gain: i64 = 0;
    let mut worst_loss: i64 = 0;

    for (driver_id, result) in entries {
        let Some(&driver) = lookup.get(driver_id.as_str()) else {
            debug!("Skipping result for unknown driver {driver_id} in race {}", race.id);
            continue;
        };

        let feature = result.feature_position();
        if feature == Some(1) && analysis.winner.is_none() {
            analysis.winner = Some(driver.clone());
        }
        if result.took_pole() && analysis.pole_position.is_none() {
            analysis.pole_position = Some(driver.clone());
        }
        if result.feature_fastest_lap && analysis.fastest_lap.is_none() {
            analysis.fastest_lap = Some(driver.clone());
        }

        if let (Some(qualifying), Some(feature)) = (result.qualifying, feature) {
            let delta = i64::from(qualifying) - i64::from(feature);
            if delta > best_gain {
                best_gain = delta;
                analysis.best_recovery = Some(PositionChange {
                    driver: driver.clone(),
                    positions: delta.unsigned_abs() as u32,
                });
            }
            if delta < worst_loss {
                worst_loss = delta;
                analysis.biggest_loser = Some(PositionChange {
                    driver: driver.clone(),
                    positions: delta.unsigned_abs() as u32,
                });
            }
        }

        if result.retired_from_feature() {
            analysis.dnfs.push(driver.clone());
        }
    }

    analysis.perfect_weekend = match (&analysis.pole_position, &analysis.winner, &analysis.fastest_lap) {
        (Some(pole), Some(winner), Some(fastest))
            if pole.id == winner.id && winner.id == fastest.id =>
        {
            Some(winner.clone())
        }
        _ => None,
    };

    Some(analysis)
}
