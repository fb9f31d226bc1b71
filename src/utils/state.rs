use crate::utils::config::Config;

/// Read-only per-process state. Championship data never lives here; it
/// arrives with each request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState { config }
    }
}
