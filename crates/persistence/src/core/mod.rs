//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Database driver abstraction (health checks, schema setup)
//! - [`QuestionStorage`] - Question CRUD, paginated listing, search, filtering
//! - [`CategoryStorage`] - Read-only category lookup
//! - [`quiz`] - Random selection of an unseen question
//!
//! Request handlers are generic over [`TriviaStorage`], which every type
//! implementing both storage traits gets for free.

pub mod backend;
pub mod quiz;
pub mod storage;

pub use backend::{Backend, BackendKind};
pub use quiz::{candidate_pool, next_question, pick};
pub use storage::{CategoryStorage, QuestionStorage, TriviaStorage};
