use std::sync::Arc;

use axum::{routing::post, Router};

use crate::{
    handlers::standings::{driver_standings, export_standings, standings_evolution},
    utils::state::AppState,
};

pub fn standings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(driver_standings))
        .route("/export", post(export_standings))
        .route("/evolution", post(standings_evolution))
}
