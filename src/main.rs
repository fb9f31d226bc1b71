use standings_backend::{
    routes::{init_tracing, make_app},
    utils::config::Config,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::init();
    init_tracing(&config);

    let bind_addr = config.bind_addr.clone();
    let app = make_app(config);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
