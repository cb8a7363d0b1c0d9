// src/scoring/leaderboard.rs

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    config::DEFAULT_LEADERBOARD_SIZE,
    error::AppError,
    models::{
        attempt::{LeaderboardQuery, RankedEntry, TalentTotal},
        leaderboard::{Leaderboard, LeaderboardEntry},
        talent::TalentProfile,
    },
    scoring::{aggregate::best_per_question, rank::dense_rank, summarize::total_per_talent},
    store::ReadScope,
};

/// Top `limit` ranked talents with a positive total, never including `caller`.
/// The slice never holds more than nine entries.
pub fn top_performers(totals: &[TalentTotal], caller: Uuid, limit: usize) -> Vec<RankedEntry> {
    let scored: Vec<TalentTotal> = totals.iter().copied().filter(|t| t.total_score > 0).collect();

    dense_rank(&scored)
        .into_iter()
        .filter(|e| e.talent_id != caller)
        .take(limit.min(DEFAULT_LEADERBOARD_SIZE))
        .collect()
}

/// Ranks `caller` against the whole population, zero scorers included.
///
/// A caller without any qualifying attempt counts as a total of zero: they
/// share the rank of existing zero scorers, or sit one past the lowest rank
/// when nobody else is at zero (rank 1 when nobody has attempted anything).
pub fn self_rank(totals: &[TalentTotal], caller: Uuid) -> RankedEntry {
    let ranked = dense_rank(totals);

    if let Some(entry) = ranked.iter().find(|e| e.talent_id == caller) {
        return *entry;
    }

    let rank = match ranked.iter().find(|e| e.total_score == 0) {
        Some(zero) => zero.rank,
        None => ranked.last().map_or(0, |e| e.rank) + 1,
    };
    RankedEntry {
        talent_id: caller,
        total_score: 0,
        rank,
    }
}

/// Runs the full pipeline for one caller inside one read scope.
pub async fn build_leaderboard(
    scope: &mut dyn ReadScope,
    query: &LeaderboardQuery,
    limit: usize,
) -> Result<Leaderboard, AppError> {
    query.validate()?;

    let attempts = scope
        .attempts(query.tenant_id, query.category, query.window)
        .await?;
    let bests = best_per_question(&attempts, &query.window);
    let totals = total_per_talent(&bests);

    tracing::debug!(
        attempts = attempts.len(),
        bests = bests.len(),
        talents = totals.len(),
        "aggregated leaderboard scores"
    );

    let top = top_performers(&totals, query.talent_id, limit);
    let me = self_rank(&totals, query.talent_id);

    let mut talent_ids: Vec<Uuid> = top.iter().map(|e| e.talent_id).collect();
    talent_ids.push(query.talent_id);

    let profiles: HashMap<Uuid, TalentProfile> = scope
        .talent_profiles(query.tenant_id, &talent_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    if !profiles.contains_key(&query.talent_id) {
        tracing::debug!(talent_id = %query.talent_id, "caller has no talent profile");
    }

    Ok(Leaderboard {
        self_performer: LeaderboardEntry::from_ranked(&me, profiles.get(&query.talent_id)),
        all_performers: top
            .iter()
            .map(|e| LeaderboardEntry::from_ranked(e, profiles.get(&e.talent_id)))
            .collect(),
    })
}
