use tracing::trace;

use crate::{
    models::{
        race::{Race, ResultsByRace},
        stats::{DriverStats, RaceSummary},
    },
    utils::points::compute_points,
};

/// Folds every race a driver took part in into season totals.
///
/// Races without a result for the driver are skipped entirely; they count
/// neither as a start nor towards the average finish.
pub fn aggregate(driver_id: &str, races: &[Race], results: &ResultsByRace) -> DriverStats {
    let mut stats = DriverStats::default();
    let mut position_sum: u64 = 0;
    let mut classified_races: u64 = 0;

    for race in races {
        let Some(result) = results.get(&race.id).and_then(|entries| entries.get(driver_id)) else {
            continue;
        };

        let points = compute_points(result, &race.points_system);
        stats.total_points = stats.total_points.saturating_add(points);

        if let Some(position) = result.feature_position() {
            if position == 1 {
                stats.wins += 1;
            }
            if position <= 3 {
                stats.podiums += 1;
            }
            position_sum += u64::from(position);
            classified_races += 1;
            stats.best_finish = Some(stats.best_finish.map_or(position, |best| best.min(position)));
            stats.worst_finish =
                Some(stats.worst_finish.map_or(position, |worst| worst.max(position)));
        } else if result.retired_from_feature() {
            stats.dnfs += 1;
        }

        if result.took_pole() {
            stats.poles += 1;
        }
        if result.set_fastest_lap() {
            stats.fastest_laps += 1;
        }

        stats.race_results.push(RaceSummary {
            race_id: race.id.clone(),
            race: race.name.clone(),
            points,
            qualifying: result.qualifying,
            sprint: result.sprint,
            feature: result.feature,
            fastest_lap: result.set_fastest_lap(),
        });
    }

    if classified_races > 0 {
        stats.average_position = Some(round_to_one_decimal(
            position_sum as f64 / classified_races as f64,
        ));
    }

    trace!(
        "Aggregated {} races for driver {driver_id}: {} points",
        stats.race_results.len(),
        stats.total_points
    );
    stats
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
