//! Starter categories and questions.

use crate::error::StoreError;
use crate::model::NewQuestion;
use crate::traits::QuestionStore;

/// The standard category set, in id order for a fresh store.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Starter questions as (category name, question, answer, difficulty).
const STARTER_QUESTIONS: &[(&str, &str, &str, u8)] = &[
    ("Science", "What is the heaviest organ in the human body?", "The Liver", 4),
    ("Science", "Who discovered penicillin?", "Alexander Fleming", 3),
    ("Science", "Hematology is a branch of medicine involving the study of what?", "Blood", 4),
    ("Science", "What is the chemical symbol for gold?", "Au", 2),
    ("Art", "La Gioconda is better known as what?", "Mona Lisa", 3),
    ("Art", "How many paintings did Van Gogh sell in his lifetime?", "One", 4),
    (
        "Art",
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
    ),
    ("Geography", "What is the largest lake in Africa?", "Lake Victoria", 2),
    ("Geography", "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3),
    ("Geography", "The Taj Mahal is located in which Indian city?", "Agra", 2),
    ("History", "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2),
    ("History", "Who invented Peanut Butter?", "George Washington Carver", 2),
    ("History", "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4),
    ("History", "In which year did the Berlin Wall fall?", "1989", 1),
    ("Entertainment", "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4),
    ("Entertainment", "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4),
    ("Entertainment", "Which band released the album 'Abbey Road'?", "The Beatles", 1),
    ("Sports", "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
    ("Sports", "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4),
    ("Sports", "What boxer's original name is Cassius Clay?", "Muhammad Ali", 1),
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub questions: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        self.categories == 0 && self.questions == 0
    }
}

/// Insert the default categories and starter questions.
///
/// Does nothing if the store already has any category.
pub async fn seed_store<S>(store: &S) -> Result<SeedSummary, StoreError>
where
    S: QuestionStore + ?Sized,
{
    if !store.list_categories().await?.is_empty() {
        tracing::info!(store = store.name(), "store already has categories, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut ids = Vec::with_capacity(DEFAULT_CATEGORIES.len());
    for kind in DEFAULT_CATEGORIES {
        let category = store.insert_category(kind).await?;
        ids.push((kind, category.id));
    }

    let mut questions = 0;
    for &(kind, text, answer, difficulty) in STARTER_QUESTIONS {
        let Some(&(_, category)) = ids.iter().find(|(name, _)| *name == kind) else {
            continue;
        };
        store
            .insert_question(&NewQuestion::new(text, answer, category, difficulty))
            .await?;
        questions += 1;
    }

    let summary = SeedSummary {
        categories: ids.len(),
        questions,
    };
    tracing::info!(
        store = store.name(),
        categories = summary.categories,
        questions = summary.questions,
        "seeded store"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn seeds_fresh_store() {
        let store = MemoryStore::new();
        let summary = seed_store(&store).await.unwrap();
        assert_eq!(summary.categories, 6);
        assert_eq!(summary.questions, STARTER_QUESTIONS.len());

        let categories = store.list_categories().await.unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(names, DEFAULT_CATEGORIES);
    }

    #[tokio::test]
    async fn starter_questions_are_valid() {
        let store = MemoryStore::new();
        seed_store(&store).await.unwrap();
        for q in store.list_questions().await.unwrap() {
            let new = NewQuestion::new(q.question, q.answer, q.category, q.difficulty);
            assert!(new.validate().is_ok());
            assert!(store.get_category(q.category).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn second_seed_is_noop() {
        let store = MemoryStore::new();
        seed_store(&store).await.unwrap();
        let again = seed_store(&store).await.unwrap();
        assert!(again.is_empty());
        assert_eq!(
            store.count_questions().await.unwrap(),
            STARTER_QUESTIONS.len() as u64
        );
    }
}
