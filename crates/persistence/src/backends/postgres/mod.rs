//! PostgreSQL backend implementation.
//!
//! Uses the same table layout as the SQLite backend with PostgreSQL types
//! (`BIGSERIAL` ids) and `ILIKE` for case-insensitive search.
//!
//! # Example
//!
//! ```no_run
//! use trivia_persistence::backends::postgres::PostgresBackend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend =
//!     PostgresBackend::from_connection_string("postgres://trivia@localhost:5432/trivia").await?;
//! backend.init_schema().await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{PostgresBackend, PostgresConfig, PostgresSslMode};
