use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{json, Value};
use standings_backend::{routes::make_app, utils::config::Config};

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::from_config(Config::default()).await
    }

    pub async fn from_config(config: Config) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = make_app(config);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{path}", self.base_url()))
            .json(body)
            .send()
            .await
            .unwrap()
    }
}

/// Two rounds of a three-driver season, written the way the web client
/// stores results: a mix of numbers, numeric strings and status tokens.
pub fn two_round_snapshot() -> Value {
    json!({
        "name": "F2 2024",
        "drivers": [
            {"id": "ver", "name": "Max Verstappen"},
            {"id": "nor", "name": "Lando Norris"},
            {"id": "pia", "name": "Oscar Piastri"}
        ],
        "races": [
            {
                "id": "bhr",
                "name": "Bahrain (Sakhir)",
                "pointsSystem": {
                    "feature": [25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
                    "sprint": [15, 12, 10, 8, 6, 4, 2, 1],
                    "pole": 2,
                    "fastestLap": 1
                }
            },
            {"id": "jed", "name": "Saudi Arabia (Jeddah)"},
            {"id": "aus", "name": "Australia (Melbourne)"}
        ],
        "results": {
            "bhr": {
                "pia": {"qualifying": 1, "feature": 1, "featureFL": true},
                "nor": {"qualifying": 3, "sprint": "1", "feature": "2"},
                "ver": {"qualifying": 2, "feature": "DNF", "sprint": ""}
            },
            "jed": {
                "pia": {"qualifying": "4", "feature": 3},
                "nor": {"qualifying": 2, "feature": "DSQ"},
                "ver": {"qualifying": 5, "feature": 1, "featureFL": true}
            }
        }
    })
}
