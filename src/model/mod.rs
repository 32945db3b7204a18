use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Connection, PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::config::{get_or_init_config, AppConfig};

#[derive(Clone, Debug)]
pub struct ModelManager {
    db: PgPool,
}

impl ModelManager {
    pub async fn init(config: &AppConfig) -> Result<Self> {
        info!("{:<12} - Initializing the DB pool", "init_db");
        let db = init_db(config).await?;

        Ok(Self { db })
    }

    /// Builds a `ModelManager` backed by a freshly created, uniquely named and
    /// fully migrated database. Each caller gets its own database so tests
    /// can't observe each other's rows.
    pub async fn test_init() -> Result<Self> {
        let mut config = get_or_init_config().clone();
        config.db_config.db_name = format!("test_{}", Uuid::new_v4().simple());

        configure_test_db(&config).await?;
        let db = init_db(&config).await?;

        Ok(Self { db })
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }
}

async fn init_db(config: &AppConfig) -> Result<PgPool> {
    // NOTE: Tests sometimes fail if there is more than 1 max connection. This fixes it.
    let max_cons = if cfg!(test) { 1 } else { 5 };

    let con_opts = config.db_config.connection_options();

    let db_pool = PgPoolOptions::new()
        .max_connections(max_cons)
        .acquire_timeout(Duration::from_millis(500))
        .connect_with(con_opts)
        .await
        .map_err(|ex| Error::FailToCreatePool(format!("Standard DB Pool: {}", ex)))?;

    Ok(db_pool)
}

async fn configure_test_db(config: &AppConfig) -> Result<()> {
    let db_config = &config.db_config;
    let mut connection =
        PgConnection::connect_with(&db_config.connection_options_without_db()).await?;

    let sql = format!(r#"CREATE DATABASE "{}";"#, db_config.db_name.clone());
    sqlx::query(&sql).execute(&mut connection).await?;

    // Create pool only used to migrate the DB
    let db_pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(1000))
        .connect_with(db_config.connection_options())
        .await
        .map_err(|ex| Error::FailToCreatePool(format!("Test Config: {}", ex)))?;
    // Migrate DB
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    Ok(())
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create db pool: {0}")]
    FailToCreatePool(String),
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("sqlx migration error: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),
}
