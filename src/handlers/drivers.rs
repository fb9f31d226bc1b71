use axum::{extract::Path, response::IntoResponse, Json};
use http::StatusCode;
use tracing::warn;

use crate::{
    models::{error::Error, snapshot::ChampionshipSnapshot},
    utils::{charts::performance_profile, driver_stats::aggregate, standings::rank},
};

pub async fn driver_stats(
    Path(driver_id): Path<String>,
    Json(snapshot): Json<ChampionshipSnapshot>,
) -> Result<impl IntoResponse, Error> {
    if snapshot.driver(&driver_id).is_none() {
        warn!("Stats requested for unknown driver {driver_id}");
        return Err(Error::not_found("Driver not found in championship"));
    }
    let stats = aggregate(&driver_id, &snapshot.races, &snapshot.results);
    Ok((StatusCode::OK, Json(stats)))
}

pub async fn driver_profile(
    Path(driver_id): Path<String>,
    Json(snapshot): Json<ChampionshipSnapshot>,
) -> Result<impl IntoResponse, Error> {
    let standings = rank(&snapshot.drivers, &snapshot.races, &snapshot.results);
    let Some(entry) = standings.iter().find(|entry| entry.driver.id == driver_id) else {
        warn!("Profile requested for unknown driver {driver_id}");
        return Err(Error::not_found("Driver not found in championship"));
    };
    let profile = performance_profile(&entry.driver, &entry.stats, &standings);
    Ok((StatusCode::OK, Json(profile)))
}
