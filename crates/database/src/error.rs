use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the store: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Schema setup failed: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Insert references a gender row that does not exist: {0}")]
    ForeignKey(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("The store connection is already closed")]
    Closed,
}
