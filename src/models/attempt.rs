// src/models/attempt.rs

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// One scored submission by a talent for one programming question.
/// Read-only for this service: rows are written by the practice workflow.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Attempt {
    pub talent_id: Uuid,
    pub question_id: Uuid,
    pub score: i64,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

/// Which questions count towards a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Only the questions scheduled as problem of the day on `date`.
    ProblemOfTheDay { date: NaiveDate },
    /// Every programming question of the tenant.
    AllTime,
}

/// Inclusive timestamp bounds. Open on either side when `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }
}

/// Everything the leaderboard pipeline needs to know about one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub tenant_id: Uuid,
    /// The caller; excluded from `allPerformers`, reported as `selfPerformer`.
    pub talent_id: Uuid,
    pub category: Category,
    pub window: DateWindow,
}

impl LeaderboardQuery {
    pub fn new(
        tenant_id: Uuid,
        talent_id: Uuid,
        category: Category,
        window: DateWindow,
    ) -> Result<Self, AppError> {
        let query = Self {
            tenant_id,
            talent_id,
            category,
            window,
        };
        query.validate()?;
        Ok(query)
    }

    /// Refuses to run against zero-valued identifiers or an inverted window.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.tenant_id.is_nil() {
            return Err(AppError::BadRequest("tenant id is required".to_string()));
        }
        if self.talent_id.is_nil() {
            return Err(AppError::BadRequest("talent id is required".to_string()));
        }
        if let (Some(from), Some(to)) = (self.window.from, self.window.to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "window start must not be after its end".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Best score of one talent on one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerQuestionBest {
    pub talent_id: Uuid,
    pub question_id: Uuid,
    pub best_score: i64,
}

/// Sum of a talent's per-question bests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TalentTotal {
    pub talent_id: Uuid,
    pub total_score: i64,
}

/// A total with its dense rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry {
    pub talent_id: Uuid,
    pub total_score: i64,
    pub rank: i64,
}
