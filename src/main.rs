use anyhow::Result;
use sakhi_bazaar::config::config_loader;
use sakhi_bazaar::infrastructure::axum_http::http_serve;
use sakhi_bazaar::infrastructure::postgres::postgres_connection;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let dotenvy_env = config_loader::load()?;
    info!(
        "ENV has been loaded, running in {} stage",
        config_loader::get_stage().as_str()
    );

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;
    info!("Postgres connection has been established");

    http_serve::start(Arc::new(dotenvy_env), Arc::new(postgres_pool)).await?;

    Ok(())
}
