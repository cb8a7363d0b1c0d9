// src/scoring/summarize.rs

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::attempt::{PerQuestionBest, TalentTotal};

/// Sums per-question bests into one total per talent.
/// Talents whose bests are all zero are kept with a total of zero.
pub fn total_per_talent(bests: &[PerQuestionBest]) -> Vec<TalentTotal> {
    let mut totals: BTreeMap<Uuid, i64> = BTreeMap::new();

    for best in bests {
        *totals.entry(best.talent_id).or_insert(0) += best.best_score;
    }

    totals
        .into_iter()
        .map(|(talent_id, total_score)| TalentTotal {
            talent_id,
            total_score,
        })
        .collect()
}
