#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub log_level: String,
    /// Drivers plotted by the championship evolution endpoint when the request doesn't say.
    pub evolution_top_drivers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            evolution_top_drivers: 5,
        }
    }
}

impl Config {
    pub fn init() -> Self {
        let defaults = Config::default();
        Config {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            log_level: std::env::var("LOG_LEVEL")
                .map(|level| level.to_lowercase())
                .unwrap_or(defaults.log_level),
            evolution_top_drivers: std::env::var("EVOLUTION_TOP_DRIVERS")
                .ok()
                .and_then(|top| top.parse::<usize>().ok())
                .unwrap_or(defaults.evolution_top_drivers),
        }
    }
}
