// src/scoring/rank.rs

use std::cmp::Reverse;

use crate::models::attempt::{RankedEntry, TalentTotal};

/// Orders totals descending and assigns dense ranks.
///
/// Equivalent to `DENSE_RANK() OVER (ORDER BY total_score DESC)`: equal totals
/// share a rank and the next distinct total gets the previous rank + 1.
/// Ties are ordered by talent id so every caller sees the same sequence.
pub fn dense_rank(totals: &[TalentTotal]) -> Vec<RankedEntry> {
    let mut sorted = totals.to_vec();
    sorted.sort_by_key(|t| (Reverse(t.total_score), t.talent_id));

    let mut ranked = Vec::with_capacity(sorted.len());
    let mut rank = 0;
    let mut previous = None;

    for total in sorted {
        if previous != Some(total.total_score) {
            rank += 1;
            previous = Some(total.total_score);
        }
        ranked.push(RankedEntry {
            talent_id: total.talent_id,
            total_score: total.total_score,
            rank,
        });
    }

    ranked
}
