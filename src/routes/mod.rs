pub mod drivers;
pub mod race;
pub mod standings;
use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    routes::{drivers::driver_routes, race::race_routes, standings::standings_routes},
    utils::{config::Config, state::AppState},
};

/// Installs the global subscriber. Call once per process.
pub fn init_tracing(config: &Config) {
    let level = match config.log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_PKG_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();
}

pub fn make_app(config: Config) -> Router {
    info!("Initializing application...");
    let state = Arc::new(AppState::new(config));

    let app = Router::new()
        .route("/", get(health_check))
        .nest("/standings", standings_routes())
        .nest("/drivers", driver_routes())
        .nest("/race", race_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    info!("Application initialized successfully");

    app
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Hello World"}))).into_response()
}
