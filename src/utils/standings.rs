use std::cmp::Ordering;

use tracing::debug;

use crate::{
    models::{
        driver::Driver,
        race::{Race, ResultsByRace},
        stats::{DriverStats, StandingsEntry},
    },
    utils::driver_stats::aggregate,
};

/// Builds the championship table for `drivers`.
///
/// Ordering: drivers with at least one classified feature finish come before
/// drivers with none. Within each group: points, wins and podiums descending,
/// then average finish ascending. Drivers equal on every key keep their input
/// order. Positions run 1..=N without gaps.
pub fn rank(drivers: &[Driver], races: &[Race], results: &ResultsByRace) -> Vec<StandingsEntry> {
    let mut table: Vec<(Driver, DriverStats)> = drivers
        .iter()
        .map(|driver| (driver.clone(), aggregate(&driver.id, races, results)))
        .collect();

    table.sort_by(|(_, a), (_, b)| compare_stats(a, b));

    debug!("Ranked {} drivers over {} races", table.len(), races.len());

    table
        .into_iter()
        .enumerate()
        .map(|(index, (driver, stats))| StandingsEntry {
            position: index as u32 + 1,
            driver,
            stats,
        })
        .collect()
}

/// `Less` means `a` is ahead of `b` in the standings.
pub fn compare_stats(a: &DriverStats, b: &DriverStats) -> Ordering {
    b.average_position
        .is_some()
        .cmp(&a.average_position.is_some())
        .then_with(|| b.total_points.cmp(&a.total_points))
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.podiums.cmp(&a.podiums))
        .then_with(|| compare_average(a.average_position, b.average_position))
}

fn compare_average(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
