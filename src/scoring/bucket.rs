// src/scoring/bucket.rs

use crate::{
    config::{AVERAGE_THRESHOLD, OUTSTANDING_THRESHOLD},
    models::feedback::{Bucket, BucketReport, TalentFeedbackSummary},
};

/// Maps an overall feedback score onto a bucket.
///
/// Scores of exactly 5.0 or 8.0 match no bucket and yield `None`.
// TODO: settle the 5.0 / 8.0 boundaries with product before closing the gap.
pub fn classify(overall_score: f64) -> Option<Bucket> {
    if overall_score > OUTSTANDING_THRESHOLD {
        Some(Bucket::Outstanding)
    } else if overall_score > AVERAGE_THRESHOLD && overall_score < OUTSTANDING_THRESHOLD {
        Some(Bucket::Good)
    } else if overall_score < AVERAGE_THRESHOLD {
        Some(Bucket::Average)
    } else {
        None
    }
}

/// Splits summaries into the three bucket collections, keeping counts alongside.
/// Summaries without a bucket are logged and left out.
pub fn partition(summaries: Vec<TalentFeedbackSummary>) -> BucketReport {
    let mut report = BucketReport::default();

    for summary in summaries {
        match summary.bucket {
            Some(Bucket::Outstanding) => {
                report.outstanding_count += 1;
                report.outstanding.push(summary);
            }
            Some(Bucket::Good) => {
                report.good_count += 1;
                report.good.push(summary);
            }
            Some(Bucket::Average) => {
                report.average_count += 1;
                report.average.push(summary);
            }
            None => {
                tracing::warn!(
                    talent_id = %summary.talent_id,
                    batch_id = %summary.batch_id,
                    overall_score = summary.overall_score,
                    "overall score sits on a bucket boundary, talent left unclassified"
                );
            }
        }
    }

    report
}
