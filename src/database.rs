pub mod schema;
pub mod models;

use anyhow::{Context, Result};
use diesel_async::{pooled_connection::AsyncDieselConnectionManager, AsyncPgConnection};
use tracing::info;

pub type Pool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

/// Builds the bb8 pool backing [`crate::store::PgJobStore`].
///
/// Connections are opened lazily by bb8, so an unreachable database only
/// surfaces once a request checks one out.
pub async fn connect(database_url: &str, max_size: u32) -> Result<Pool> {
    info!("Connecting to database (max_size={})", max_size);
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = bb8::Pool::builder()
        .max_size(max_size)
        .build(config)
        .await
        .context("Unable to build the database connection pool!")?;

    Ok(pool)
}
