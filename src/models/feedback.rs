// src/models/feedback.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// One answered feedback question, joined with its question and group.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FeedbackAnswer {
    pub talent_id: Uuid,
    pub batch_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub group_id: Uuid,
    pub group_name: String,
    pub group_order: i32,
    pub keyword: String,
    pub question_id: Uuid,
    pub question_order: i32,
    /// Only option-based questions carry a numeric key.
    pub has_options: bool,
    /// Soft-deleted question.
    pub deleted: bool,
    /// Key of the option the evaluator picked.
    pub chosen_key: Option<i32>,
    pub max_score: i32,
}

/// Interview rating given to a talent inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct InterviewRating {
    pub talent_id: Uuid,
    pub batch_id: Uuid,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordScore {
    pub keyword: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupScore {
    pub group_id: Uuid,
    pub group_name: String,
    pub score: f64,
    pub keyword_scores: Vec<KeywordScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    Outstanding,
    Good,
    Average,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentFeedbackSummary {
    pub talent_id: Uuid,
    pub batch_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub overall_score: f64,
    /// Ordered by group display order. Groups without answers are absent.
    pub group_scores: Vec<GroupScore>,
    pub interview_rating: Option<f64>,
    /// `None` for scores sitting exactly on a threshold.
    pub bucket: Option<Bucket>,
}

/// Dashboard response: talents split into the three buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketReport {
    pub outstanding: Vec<TalentFeedbackSummary>,
    pub outstanding_count: usize,
    pub good: Vec<TalentFeedbackSummary>,
    pub good_count: usize,
    pub average: Vec<TalentFeedbackSummary>,
    pub average_count: usize,
}

/// Typed filter for feedback reads. Optional fields are forwarded to the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackQuery {
    pub tenant_id: Uuid,
    pub batch_id: Option<Uuid>,
    pub talent_id: Option<Uuid>,
    pub source_id: Option<Uuid>,
    pub sales_person_id: Option<Uuid>,
    pub batch_status: Option<String>,
}

impl FeedbackQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tenant_id.is_nil() {
            return Err(AppError::BadRequest("tenant id is required".to_string()));
        }
        if self.talent_id.is_some_and(|id| id.is_nil()) {
            return Err(AppError::BadRequest("talent id is required".to_string()));
        }
        Ok(())
    }
}

/// Query string of the batch feedback dashboard.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDashboardParams {
    pub batch_id: Option<Uuid>,
    pub source_id: Option<Uuid>,
    pub sales_person_id: Option<Uuid>,
    #[validate(length(min = 1, max = 32, message = "batchStatus must be between 1 and 32 characters."))]
    pub batch_status: Option<String>,
}

impl FeedbackDashboardParams {
    pub fn into_query(self, tenant_id: Uuid) -> FeedbackQuery {
        FeedbackQuery {
            tenant_id,
            batch_id: self.batch_id,
            talent_id: None,
            source_id: self.source_id,
            sales_person_id: self.sales_person_id,
            batch_status: self.batch_status,
        }
    }
}

/// Query string of the per-talent feedback endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentFeedbackParams {
    pub batch_id: Option<Uuid>,
}
