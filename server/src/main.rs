use tokio::net::TcpListener;
use tracing::info;

use calc_server::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API is listening on {addr}");
    calc_server::run(listener).await?;
    Ok(())
}
