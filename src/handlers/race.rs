use axum::{extract::Path, response::IntoResponse, Json};
use http::StatusCode;
use tracing::warn;

use crate::{
    models::{error::Error, snapshot::ChampionshipSnapshot},
    utils::race_analysis::analyze_race,
};

/// Responds with `null` when the race exists but has no results yet.
pub async fn race_analysis(
    Path(race_id): Path<String>,
    Json(snapshot): Json<ChampionshipSnapshot>,
) -> Result<impl IntoResponse, Error> {
    let Some(race) = snapshot.race(&race_id) else {
        warn!("Analysis requested for unknown race {race_id}");
        return Err((StatusCode::NOT_FOUND, "Race not found in championship").into());
    };
    let analysis = analyze_race(race, &snapshot.results, &snapshot.drivers);
    Ok((StatusCode::OK, Json(analysis)))
}
