// src/scoring/feedback.rs

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::AppError,
    models::feedback::{BucketReport, FeedbackQuery, InterviewRating, TalentFeedbackSummary},
    scoring::{
        bucket::{classify, partition},
        rollup::rollup,
    },
    store::ReadScope,
};

/// Mean rating per (talent, batch).
fn average_ratings(ratings: &[InterviewRating]) -> HashMap<(Uuid, Uuid), f64> {
    let mut sums: HashMap<(Uuid, Uuid), (f64, u32)> = HashMap::new();
    for r in ratings {
        let (sum, count) = sums.entry((r.talent_id, r.batch_id)).or_insert((0.0, 0));
        *sum += r.rating;
        *count += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / f64::from(count)))
        .collect()
}

/// Feedback summaries for every talent matching `query`, each already classified.
pub async fn summarize_feedback(
    scope: &mut dyn ReadScope,
    query: &FeedbackQuery,
) -> Result<Vec<TalentFeedbackSummary>, AppError> {
    query.validate()?;

    let answers = scope.feedback_answers(query).await?;
    let ratings = average_ratings(&scope.interview_ratings(query).await?);

    let rollups = rollup(&answers);
    tracing::debug!(
        answers = answers.len(),
        talents = rollups.len(),
        "rolled up feedback scores"
    );

    Ok(rollups
        .into_iter()
        .map(|r| TalentFeedbackSummary {
            interview_rating: ratings.get(&(r.talent_id, r.batch_id)).copied(),
            bucket: classify(r.overall_score),
            talent_id: r.talent_id,
            batch_id: r.batch_id,
            first_name: r.first_name,
            last_name: r.last_name,
            overall_score: r.overall_score,
            group_scores: r.group_scores,
        })
        .collect())
}

/// Batch dashboard: summaries split into the three bucket collections.
pub async fn feedback_report(
    scope: &mut dyn ReadScope,
    query: &FeedbackQuery,
) -> Result<BucketReport, AppError> {
    let summaries = summarize_feedback(scope, query).await?;
    Ok(partition(summaries))
}

/// Summaries of one talent, one per batch (or only `batch_id` when given).
pub async fn talent_feedback(
    scope: &mut dyn ReadScope,
    tenant_id: Uuid,
    talent_id: Uuid,
    batch_id: Option<Uuid>,
) -> Result<Vec<TalentFeedbackSummary>, AppError> {
    if talent_id.is_nil() {
        return Err(AppError::BadRequest("talent id is required".to_string()));
    }

    let query = FeedbackQuery {
        tenant_id,
        talent_id: Some(talent_id),
        batch_id,
        ..FeedbackQuery::default()
    };

    summarize_feedback(scope, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_averaged_per_talent_and_batch() {
        let (talent, batch, other_batch) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let ratings = vec![
            InterviewRating { talent_id: talent, batch_id: batch, rating: 4.0 },
            InterviewRating { talent_id: talent, batch_id: batch, rating: 3.0 },
            InterviewRating { talent_id: talent, batch_id: other_batch, rating: 5.0 },
        ];

        let averages = average_ratings(&ratings);
        assert_eq!(averages.get(&(talent, batch)), Some(&3.5));
        assert_eq!(averages.get(&(talent, other_batch)), Some(&5.0));
    }
}
