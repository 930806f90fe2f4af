use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_portal::{
    config::Config,
    database,
    store::{MemoryJobStore, PgJobStore},
    State
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "job_portal=debug,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
        )
        .init();

    let config = Config::from_env()?;

    info!("Initializing service...");

    let state = match &config.database_url {
        Some(database_url) => {
            let pool = database::connect(database_url, config.pool_size).await?;
            State::new(PgJobStore::new(pool))
        },
        None => {
            warn!("DATABASE_URL is not set, jobs will only be kept in memory!");
            State::new(MemoryJobStore::default())
        }
    };

    let app = job_portal::app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&config.address)
        .await?;

    info!("Service now listening on {}", &config.address);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>()
    ).await?;

    Ok(())
}
