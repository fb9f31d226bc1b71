use std::sync::Arc;

use crate::{
    models::snapshot::ChampionshipSnapshot,
    utils::{
        charts::championship_evolution,
        export::{export_file_name, to_csv},
        standings::rank,
        state::AppState,
    },
};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::{header, StatusCode};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
pub struct EvolutionQuery {
    top: Option<usize>,
}

pub async fn driver_standings(Json(snapshot): Json<ChampionshipSnapshot>) -> impl IntoResponse {
    let standings = rank(&snapshot.drivers, &snapshot.races, &snapshot.results);
    (StatusCode::OK, Json(standings)).into_response()
}

pub async fn export_standings(Json(snapshot): Json<ChampionshipSnapshot>) -> impl IntoResponse {
    let standings = rank(&snapshot.drivers, &snapshot.races, &snapshot.results);

    let body = to_csv(&standings);
    let file_name = export_file_name(snapshot.name.as_deref());
    info!("Exporting {} standings rows as {file_name}", standings.len());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
        .into_response()
}

pub async fn standings_evolution(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EvolutionQuery>,
    Json(snapshot): Json<ChampionshipSnapshot>,
) -> impl IntoResponse {
    let top = params.top.unwrap_or(state.config.evolution_top_drivers);
    let standings = rank(&snapshot.drivers, &snapshot.races, &snapshot.results);
    let evolution = championship_evolution(&standings, &snapshot.races, &snapshot.results, top);
    (StatusCode::OK, Json(evolution)).into_response()
}
