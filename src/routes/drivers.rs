use std::sync::Arc;

use axum::{routing::post, Router};

use crate::{
    handlers::drivers::{driver_profile, driver_stats},
    utils::state::AppState,
};

pub fn driver_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{driver_id}/stats", post(driver_stats))
        .route("/{driver_id}/profile", post(driver_profile))
}
