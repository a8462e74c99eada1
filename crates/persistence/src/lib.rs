//! Trivia Persistence Layer
//!
//! This crate stores trivia questions and categories and exposes them through
//! a small set of storage traits. Database backends are selected with feature
//! flags, and request handlers only ever see the traits.
//!
//! # Features
//!
//! - **Multiple Backends**: SQLite (default) and PostgreSQL
//! - **Paginated Listing**: fixed-size, 1-indexed pages ordered by id
//! - **Search**: case-insensitive substring search over question text
//! - **Quiz Selection**: random pick from the not-yet-asked pool of a category
//!
//! # Backend Features
//!
//! ```toml
//! [dependencies]
//! trivia-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL via tokio-postgres and deadpool
//!
//! # Architecture
//!
//! - [`types`] - Questions, categories, and pages
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and the quiz selector
//! - [`backends`] - Backend implementations
//! - [`seed`] - Sample question set for development databases
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use trivia_persistence::backends::sqlite::SqliteBackend;
//! use trivia_persistence::core::QuestionStorage;
//! use trivia_persistence::types::NewQuestion;
//!
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let stored = backend
//!     .create(NewQuestion::new("Who discovered penicillin?", "Alexander Fleming", "1", 3))
//!     .await?;
//! assert!(backend.read(stored.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod seed;
pub mod types;
