use crate::{
    models::{
        chart::{ChampionshipEvolution, EvolutionSeries, PerformanceProfile},
        driver::Driver,
        race::{Race, ResultsByRace},
        stats::{DriverStats, StandingsEntry},
    },
    utils::{points::compute_points, race_utils::race_label},
};

/// Points lost per retirement on the consistency axis.
const CONSISTENCY_PENALTY: f64 = 20.0;

/// Cumulative points after every race for the first `top` drivers of `standings`.
pub fn championship_evolution(
    standings: &[StandingsEntry],
    races: &[Race],
    results: &ResultsByRace,
    top: usize,
) -> ChampionshipEvolution {
    let labels = races
        .iter()
        .map(|race| race_label(&race.name).to_string())
        .collect();

    let series = standings
        .iter()
        .take(top)
        .map(|entry| {
            let mut running_total: u32 = 0;
            let cumulative_points = races
                .iter()
                .map(|race| {
                    if let Some(result) = results
                        .get(&race.id)
                        .and_then(|entries| entries.get(&entry.driver.id))
                    {
                        let points = compute_points(result, &race.points_system);
                        running_total = running_total.saturating_add(points);
                    }
                    running_total
                })
                .collect();
            EvolutionSeries {
                driver: entry.driver.clone(),
                cumulative_points,
            }
        })
        .collect();

    ChampionshipEvolution { labels, series }
}

/// Scales a driver's record against the best in `standings`.
pub fn performance_profile(
    driver: &Driver,
    stats: &DriverStats,
    standings: &[StandingsEntry],
) -> PerformanceProfile {
    PerformanceProfile {
        driver: driver.clone(),
        points: percentage(stats.total_points, field_max(standings, |s| s.total_points)),
        wins: percentage(stats.wins, field_max(standings, |s| s.wins)),
        podiums: percentage(stats.podiums, field_max(standings, |s| s.podiums)),
        poles: percentage(stats.poles, field_max(standings, |s| s.poles)),
        fastest_laps: percentage(stats.fastest_laps, field_max(standings, |s| s.fastest_laps)),
        consistency: (100.0 - f64::from(stats.dnfs) * CONSISTENCY_PENALTY).max(0.0),
    }
}

fn field_max(standings: &[StandingsEntry], metric: impl Fn(&DriverStats) -> u32) -> u32 {
    standings
        .iter()
        .map(|entry| metric(&entry.stats))
        .max()
        .unwrap_or(0)
}

fn percentage(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        f64::from(value) / f64::from(max) * 100.0
    }
}
