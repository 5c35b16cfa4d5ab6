use crate::connection::Db;
use crate::error::DbError;
use core_types::Person;

impl Db {
    /// Inserts one person row, committed immediately.
    ///
    /// The referenced gender row must already be seeded; a violation maps
    /// to `DbError::ForeignKey`. Bulk callers get no wrapping transaction,
    /// so rows inserted before a mid-run failure stay in place.
    pub async fn insert_person(&mut self, person: &Person) -> Result<(), DbError> {
        let conn = self.handle()?;
        sqlx::query("INSERT INTO person (full_name, birthday, gender_id) VALUES (?, ?, ?)")
            .bind(person.full_name())
            .bind(person.birth_date())
            .bind(person.gender_id())
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                let fk_violation = matches!(
                    &err,
                    sqlx::Error::Database(db) if db.is_foreign_key_violation()
                );
                if fk_violation {
                    DbError::ForeignKey(err)
                } else {
                    DbError::Query(err)
                }
            })?;
        Ok(())
    }
}
