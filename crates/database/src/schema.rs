use crate::connection::Db;
use crate::error::DbError;
use core_types::Gender;

const CREATE_GENDER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS gender
(
    gender_id INTEGER PRIMARY KEY AUTO_INCREMENT,
    type CHAR(255) NOT NULL
)
"#;

const CREATE_PERSON_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS person
(
    person_id INTEGER PRIMARY KEY AUTO_INCREMENT,
    full_name CHAR(255) NOT NULL,
    birthday DATE NOT NULL,
    gender_id INTEGER,
    FOREIGN KEY (gender_id) REFERENCES gender(gender_id)
)
"#;

impl Db {
    /// Creates the `gender` lookup table if it is absent. Idempotent.
    pub async fn ensure_gender_table(&mut self) -> Result<(), DbError> {
        let conn = self.handle()?;
        sqlx::query(CREATE_GENDER_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(DbError::Schema)?;
        Ok(())
    }

    /// Creates the `person` table if it is absent. Idempotent.
    ///
    /// `person` carries a foreign key to `gender`, so the lookup table
    /// must exist first; otherwise the statement fails with a schema
    /// error.
    pub async fn ensure_person_table(&mut self) -> Result<(), DbError> {
        let conn = self.handle()?;
        sqlx::query(CREATE_PERSON_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(DbError::Schema)?;
        Ok(())
    }

    /// Seeds the two canonical gender rows in one batch.
    ///
    /// There is no uniqueness constraint on `type`: running this twice
    /// duplicates the rows. `ensure_schema` invokes it exactly once,
    /// right after the lookup table is created.
    pub async fn seed_gender_types(&mut self) -> Result<(), DbError> {
        let conn = self.handle()?;
        sqlx::query("INSERT INTO gender (type) VALUES (?), (?)")
            .bind(Gender::Male.label())
            .bind(Gender::Female.label())
            .execute(&mut *conn)
            .await
            .map_err(DbError::Schema)?;
        tracing::debug!("gender lookup table seeded");
        Ok(())
    }

    /// Full schema bootstrap: lookup table, seed rows, fact table.
    pub async fn ensure_schema(&mut self) -> Result<(), DbError> {
        self.ensure_gender_table().await?;
        self.seed_gender_types().await?;
        self.ensure_person_table().await?;
        Ok(())
    }
}
