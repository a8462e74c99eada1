//! Seed data for new databases.
//!
//! Categories are always seeded by the schema initializer. The sample
//! questions are only inserted on request (e.g. `--seed-sample-data`) and only
//! into an empty store.

use tracing::info;

use crate::core::QuestionStorage;
use crate::error::StorageResult;
use crate::types::NewQuestion;

/// The fixed category set as `(id, type)` pairs.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

const SAMPLE_QUESTIONS: &[(&str, &str, i64, i64)] = &[
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// Returns the sample question set.
pub fn sample_questions() -> Vec<NewQuestion> {
    SAMPLE_QUESTIONS
        .iter()
        .map(|(question, answer, category, difficulty)| {
            NewQuestion::new(*question, *answer, category.to_string(), *difficulty)
        })
        .collect()
}

/// Inserts the sample questions if the store holds no questions.
///
/// Returns the number of questions inserted.
pub async fn seed_sample_questions<S>(storage: &S) -> StorageResult<usize>
where
    S: QuestionStorage + ?Sized,
{
    if storage.count().await? > 0 {
        return Ok(0);
    }

    let questions = sample_questions();
    let inserted = questions.len();
    for question in questions {
        storage.create(question).await?;
    }

    info!(inserted, backend = storage.backend_name(), "Seeded sample questions");
    Ok(inserted)
}
