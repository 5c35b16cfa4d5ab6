use crate::error::DbError;
use configuration::StoreSettings;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};

/// MySQL "unknown database" (ER_BAD_DB_ERROR).
const ER_BAD_DB: u16 = 1049;

/// A live, process-scoped connection to the relational store.
///
/// The handle owns exactly one connection; every operation borrows it
/// mutably, so statements execute strictly one at a time. `close` is
/// idempotent and the handle rejects use after closing.
pub struct Db {
    conn: Option<MySqlConnection>,
}

impl Db {
    /// Establishes a connection scoped to the configured database.
    ///
    /// If the server reports that the database does not exist, it is
    /// created over a short unscoped connection and the scoped connection
    /// is retried exactly once. Any other failure, including a failure of
    /// the retry itself, surfaces as a connection error.
    pub async fn connect(settings: &StoreSettings) -> Result<Self, DbError> {
        let scoped = scoped_options(settings);
        match MySqlConnection::connect_with(&scoped).await {
            Ok(conn) => Ok(Self { conn: Some(conn) }),
            Err(err) if is_unknown_database(&err) => {
                tracing::info!(database = %settings.database, "database missing, creating it");
                create_database(settings).await?;
                let conn = MySqlConnection::connect_with(&scoped)
                    .await
                    .map_err(DbError::Connection)?;
                Ok(Self { conn: Some(conn) })
            }
            Err(err) => Err(DbError::Connection(err)),
        }
    }

    /// Closes the connection. Calling this on an already-closed handle is
    /// a no-op.
    pub async fn close(&mut self) -> Result<(), DbError> {
        if let Some(conn) = self.conn.take() {
            conn.close().await.map_err(DbError::Connection)?;
        }
        Ok(())
    }

    /// The live connection, or `Closed` after `close` has run.
    pub(crate) fn handle(&mut self) -> Result<&mut MySqlConnection, DbError> {
        self.conn.as_mut().ok_or(DbError::Closed)
    }
}

fn unscoped_options(settings: &StoreSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
}

fn scoped_options(settings: &StoreSettings) -> MySqlConnectOptions {
    unscoped_options(settings).database(&settings.database)
}

fn is_unknown_database(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db
            .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
            .is_some_and(|mysql| mysql.number() == ER_BAD_DB),
        _ => false,
    }
}

/// Creates the target database over a short unscoped connection.
async fn create_database(settings: &StoreSettings) -> Result<(), DbError> {
    let mut conn = MySqlConnection::connect_with(&unscoped_options(settings))
        .await
        .map_err(DbError::Connection)?;
    let stmt = format!("CREATE DATABASE IF NOT EXISTS `{}`", settings.database);
    sqlx::query(&stmt)
        .execute(&mut conn)
        .await
        .map_err(DbError::Connection)?;
    conn.close().await.map_err(DbError::Connection)?;
    Ok(())
}
