use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("no questions left to ask")]
    Exhausted,
}

/// Picks one question uniformly at random among the candidates whose id is
/// not in `previous`.
pub fn pick_question<R>(
    candidates: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Result<Question, QuizError>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    remaining.choose(rng).cloned().ok_or(QuizError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: &str) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category: category.to_owned(),
            difficulty: 1,
        }
    }

    #[test]
    fn never_returns_previous_questions() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous: HashSet<i64> = [1, 2, 3].into_iter().collect();
        for _ in 0..50 {
            let pool = (1..=5).map(|id| question(id, "1")).collect();
            let picked = pick_question(pool, &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn every_remaining_question_can_be_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        let previous = HashSet::new();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let pool = (1..=4).map(|id| question(id, "2")).collect();
            seen.insert(pick_question(pool, &previous, &mut rng).unwrap().id);
        }
        assert_eq!(seen, (1..=4).collect());
    }

    #[test]
    fn exhausted_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous: HashSet<i64> = [1, 2].into_iter().collect();
        let pool = vec![question(1, "1"), question(2, "1")];
        assert!(matches!(
            pick_question(pool, &previous, &mut rng),
            Err(QuizError::Exhausted)
        ));
        assert!(matches!(
            pick_question(Vec::new(), &HashSet::new(), &mut rng),
            Err(QuizError::Exhausted)
        ));
    }
}
