//! Quiz question selection.
//!
//! The selector keeps no state between calls: the client sends the ids it has
//! already been asked, and the next question is drawn uniformly at random from
//! the rest of the category.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::core::storage::{CategoryStorage, QuestionStorage};
use crate::error::{StorageResult, ValidationError};
use crate::types::{CategoryFilter, Question};

/// Loads the questions still available for a quiz.
///
/// # Errors
///
/// * `ValidationError::InvalidCategory` - If the filter names an unknown category
pub async fn candidate_pool<S>(
    storage: &S,
    filter: CategoryFilter,
    previous: &[i64],
) -> StorageResult<Vec<Question>>
where
    S: QuestionStorage + CategoryStorage + ?Sized,
{
    if let CategoryFilter::Only(id) = filter {
        if storage.get(id).await?.is_none() {
            return Err(ValidationError::InvalidCategory {
                category: id.to_string(),
            }
            .into());
        }
    }

    let pool = storage.quiz_pool(filter, previous).await?;
    debug!(
        category = %filter,
        previous = previous.len(),
        remaining = pool.len(),
        "Computed quiz pool"
    );
    Ok(pool)
}

/// Picks one question uniformly at random, or `None` if the pool is empty.
pub fn pick<R>(pool: Vec<Question>, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).cloned()
}

/// Returns a random question from the category that is not in `previous`.
///
/// An exhausted pool is a successful `None`, not an error.
pub async fn next_question<S, R>(
    storage: &S,
    filter: CategoryFilter,
    previous: &[i64],
    rng: &mut R,
) -> StorageResult<Option<Question>>
where
    S: QuestionStorage + CategoryStorage + ?Sized,
    R: Rng + Send + ?Sized,
{
    let pool = candidate_pool(storage, filter, previous).await?;
    Ok(pick(pool, rng))
}
