use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

/// `acquire_timeout` keeps an exhausted pool from stalling a request past
/// the store deadline.
pub async fn init_pool(database_url: &str, acquire_timeout: Duration) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(16)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
