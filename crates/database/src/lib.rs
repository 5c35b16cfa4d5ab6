//! # Census Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! MySQL store holding the person schema.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** encapsulates all SQL and connection handling behind a
//!   small API; the rest of the application never sees a query string.
//! - **Single connection:** the store is reached through exactly one live
//!   `MySqlConnection`, owned for the process lifetime. Every operation
//!   borrows the handle mutably, so at most one statement is ever in
//!   flight. This sequencing is load-bearing for the generator's fairness
//!   guarantee and must not be replaced with a pool.
//!
//! ## Public API
//!
//! - `Db`: the connection handle. `Db::connect` performs the
//!   missing-database recovery (create then retry once); schema setup,
//!   insertion and reporting are methods on the same handle.
//! - `DbError`: the specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod report;
pub mod repository;
pub mod schema;

// Re-export the key components to create a clean, public-facing API.
pub use connection::Db;
pub use error::DbError;
pub use report::{FILTERED_REPORT_FILE, ReportRow, UNIQUE_REPORT_FILE};
