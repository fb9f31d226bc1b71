use crate::models::race::{PointsSystem, RaceResult};

/// Fastest-lap bonuses only go to drivers classified inside this position.
pub const FASTEST_LAP_CUTOFF: u32 = 10;

/// Points a driver scored at one race weekend under `points_system`.
///
/// Anything that cannot score (absent or retired finishes, positions past the
/// end of the points table) contributes nothing rather than failing. The
/// total saturates at `u32::MAX`.
pub fn compute_points(result: &RaceResult, points_system: &PointsSystem) -> u32 {
    let mut points: u32 = 0;

    if result.took_pole() {
        points = points.saturating_add(points_system.pole);
    }

    let sprint = result.sprint_position();
    points = points.saturating_add(position_points(&points_system.sprint, sprint));
    if result.sprint_fastest_lap && fastest_lap_eligible(sprint) {
        points = points.saturating_add(points_system.fastest_lap);
    }

    let feature = result.feature_position();
    points = points.saturating_add(position_points(&points_system.feature, feature));
    if result.feature_fastest_lap && fastest_lap_eligible(feature) {
        points = points.saturating_add(points_system.fastest_lap);
    }

    points
}

fn position_points(table: &[u32], position: Option<u32>) -> u32 {
    position
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or(0)
}

fn fastest_lap_eligible(position: Option<u32>) -> bool {
    position.is_some_and(|position| position <= FASTEST_LAP_CUTOFF)
}
