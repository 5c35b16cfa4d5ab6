use crate::connection::Db;
use crate::error::DbError;
use chrono::NaiveDate;
use core_types::Gender;
use sqlx::FromRow;
use std::time::Instant;

/// File the unique listing is written to.
pub const UNIQUE_REPORT_FILE: &str = "report_unique.txt";
/// File the filtered listing is written to.
pub const FILTERED_REPORT_FILE: &str = "report_first_letter_f.txt";

/// Surname initial the filtered listing selects on.
const FILTER_INITIAL: char = 'F';

/// One projected report row: name, birthday, gender label and age in whole
/// years as computed by the store at query time.
#[derive(Debug, Clone, FromRow)]
pub struct ReportRow {
    pub full_name: String,
    pub birthday: NaiveDate,
    /// NULL when the LEFT JOIN finds no gender row.
    pub gender: Option<String>,
    pub age: i64,
}

// ANY_VALUE keeps the grouped projection valid under ONLY_FULL_GROUP_BY;
// gender is functionally dependent on the grouped columns in practice.
const UNIQUE_QUERY: &str = r#"
SELECT p.full_name,
       p.birthday,
       ANY_VALUE(g.type) AS gender,
       TIMESTAMPDIFF(YEAR, p.birthday, NOW()) AS age
FROM person AS p
LEFT JOIN gender AS g ON p.gender_id = g.gender_id
GROUP BY p.full_name, p.birthday
ORDER BY p.full_name
"#;

const FILTERED_QUERY: &str = r#"
SELECT p.full_name,
       p.birthday,
       g.type AS gender,
       TIMESTAMPDIFF(YEAR, p.birthday, NOW()) AS age
FROM person AS p
LEFT JOIN gender AS g ON p.gender_id = g.gender_id
WHERE p.full_name LIKE ? AND g.type = ?
"#;

impl Db {
    /// Writes the distinct person listing, one row per line, overwriting
    /// any previous report file. Returns the number of data rows written.
    ///
    /// Rows are grouped by `(full_name, birthday)` to collapse accidental
    /// duplicates and ordered by full name.
    pub async fn write_unique_report(&mut self, path: &str) -> Result<usize, DbError> {
        let conn = self.handle()?;
        let rows: Vec<ReportRow> = sqlx::query_as(UNIQUE_QUERY).fetch_all(&mut *conn).await?;

        let mut out = String::new();
        for row in &rows {
            out.push_str(&format_report_line(row));
            out.push('\n');
        }
        write_report(path, &out)?;

        tracing::info!(rows = rows.len(), path, "unique report written");
        Ok(rows.len())
    }

    /// Writes the listing of male persons whose surname starts with the
    /// filter initial, followed by a line reporting the wall-clock query
    /// time. Returns the number of data rows written.
    pub async fn write_filtered_report(&mut self, path: &str) -> Result<usize, DbError> {
        let conn = self.handle()?;
        let pattern = format!("{FILTER_INITIAL}%");

        let started = Instant::now();
        let rows: Vec<ReportRow> = sqlx::query_as(FILTERED_QUERY)
            .bind(&pattern)
            .bind(Gender::Male.label())
            .fetch_all(&mut *conn)
            .await?;
        let elapsed = started.elapsed();

        let mut out = String::new();
        for row in &rows {
            out.push_str(&format_report_line(row));
            out.push('\n');
        }
        out.push_str(&format_timing_line(elapsed.as_secs_f64()));
        out.push('\n');
        write_report(path, &out)?;

        tracing::info!(rows = rows.len(), path, "filtered report written");
        Ok(rows.len())
    }
}

/// `full_name birthday gender age`, space separated.
fn format_report_line(row: &ReportRow) -> String {
    format!(
        "{} {} {} {}",
        row.full_name,
        row.birthday,
        row.gender.as_deref().unwrap_or("unknown"),
        row.age
    )
}

fn format_timing_line(seconds: f64) -> String {
    format!("Query executed in {seconds:.3}s")
}

/// Full overwrite; a failed query leaves the previous file untouched
/// because nothing is written until the result set is in memory.
fn write_report(path: &str, contents: &str) -> Result<(), DbError> {
    std::fs::write(path, contents).map_err(|source| DbError::Report {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ReportRow {
        ReportRow {
            full_name: "Fedorov Ivan Petrovich".to_string(),
            birthday: NaiveDate::from_ymd_opt(1995, 1, 1).unwrap(),
            gender: Some("male".to_string()),
            age: 31,
        }
    }

    #[test]
    fn report_line_is_space_separated() {
        let line = format_report_line(&sample_row());
        assert_eq!(line, "Fedorov Ivan Petrovich 1995-01-01 male 31");
    }

    #[test]
    fn missing_gender_prints_placeholder() {
        let mut row = sample_row();
        row.gender = None;
        let line = format_report_line(&row);
        assert!(line.ends_with("unknown 31"));
    }

    #[test]
    fn timing_line_has_three_decimals() {
        assert_eq!(format_timing_line(0.1234), "Query executed in 0.123s");
        assert_eq!(format_timing_line(2.0), "Query executed in 2.000s");
    }
}
