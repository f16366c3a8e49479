use crate::setting::{Pool, SettingsError};

use super::setting::get_settings;
use async_once_cell::OnceCell;
use lazy_static::lazy_static;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

lazy_static! {
    pub static ref DATABASE: Arc<OnceCell<DatabaseConnection>> = Arc::new(OnceCell::new());
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database global store is unitialized")]
    Uninitialized,

    #[error("Could not load settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Error while connecting to the database: {0}")]
    Database(#[from] DbErr),
}

pub fn get_database() -> Result<&'static DatabaseConnection, DatabaseError> {
    DATABASE.get().ok_or(DatabaseError::Uninitialized)
}

pub async fn open_database() -> Result<DatabaseConnection, DatabaseError> {
    let settings = get_settings()?;
    connect(&settings.db, &settings.pool).await
}

/// Opens a connection pool. Requests borrow connections from it through
/// their own transactions, nothing else holds on to a connection.
pub async fn connect(url: &str, pool: &Pool) -> Result<DatabaseConnection, DatabaseError> {
    tracing::trace! {%url, "Connecting to database"};
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .connect_timeout(Duration::from_secs(pool.connect_timeout))
        .acquire_timeout(Duration::from_secs(pool.acquire_timeout))
        .idle_timeout(Duration::from_secs(pool.idle_timeout))
        .sqlx_logging(pool.sqlx_logging);
    Database::connect(opt)
        .await
        .map_err(DatabaseError::Database)
}
