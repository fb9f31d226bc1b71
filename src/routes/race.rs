use std::sync::Arc;

use axum::{routing::post, Router};

use crate::{handlers::race::race_analysis, utils::state::AppState};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new().route("/{race_id}/analysis", post(race_analysis))
}
