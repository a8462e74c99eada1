//! SQLite backend implementation.
//!
//! Supports in-memory databases (used by the test suites) and file-based
//! databases for development and small deployments.
//!
//! # Example
//!
//! ```no_run
//! use trivia_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE categories (
//!     id INTEGER PRIMARY KEY,
//!     type TEXT NOT NULL
//! );
//!
//! CREATE TABLE questions (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     question TEXT NOT NULL,
//!     answer TEXT NOT NULL,
//!     category TEXT NOT NULL,  -- category id as text, not a foreign key
//!     difficulty INTEGER NOT NULL
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
