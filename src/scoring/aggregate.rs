// src/scoring/aggregate.rs

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::attempt::{Attempt, DateWindow, PerQuestionBest};

/// Reduces attempts to the best score per (talent, question).
///
/// Attempts outside `window` are ignored even if the store already filtered
/// them, so the result does not depend on what the backend pushed down.
/// Output is ordered by talent, then question.
pub fn best_per_question(attempts: &[Attempt], window: &DateWindow) -> Vec<PerQuestionBest> {
    let mut best: BTreeMap<(Uuid, Uuid), i64> = BTreeMap::new();

    for attempt in attempts.iter().filter(|a| window.contains(a.created_at)) {
        best.entry((attempt.talent_id, attempt.question_id))
            .and_modify(|score| *score = (*score).max(attempt.score))
            .or_insert(attempt.score);
    }

    best.into_iter()
        .map(|((talent_id, question_id), best_score)| PerQuestionBest {
            talent_id,
            question_id,
            best_score,
        })
        .collect()
}
