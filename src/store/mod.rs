// src/store/mod.rs

//! Read access to attempts, talents and feedback.
//!
//! Every request opens exactly one [`ReadScope`] and performs all of its reads
//! through it, so the top slice and the caller's own rank are computed from
//! the same snapshot.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        attempt::{Attempt, Category, DateWindow},
        feedback::{FeedbackAnswer, FeedbackQuery, InterviewRating},
        talent::TalentProfile,
    },
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Entry point to a storage backend. Cheap to share between requests.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Opens a consistent, read-only view of the data.
    async fn read_scope(&self) -> Result<Box<dyn ReadScope>, AppError>;
}

/// A consistent snapshot. Dropped without `finish` it is simply rolled back.
#[async_trait]
pub trait ReadScope: Send {
    async fn tenant_exists(&mut self, tenant_id: Uuid) -> Result<bool, AppError>;

    /// Raw attempts of the tenant for questions in `category`.
    /// Backends may also push the window down; callers re-apply it.
    async fn attempts(
        &mut self,
        tenant_id: Uuid,
        category: Category,
        window: DateWindow,
    ) -> Result<Vec<Attempt>, AppError>;

    /// Profiles for the given talents. Unknown ids are skipped.
    async fn talent_profiles(
        &mut self,
        tenant_id: Uuid,
        talent_ids: &[Uuid],
    ) -> Result<Vec<TalentProfile>, AppError>;

    async fn feedback_answers(
        &mut self,
        query: &FeedbackQuery,
    ) -> Result<Vec<FeedbackAnswer>, AppError>;

    async fn interview_ratings(
        &mut self,
        query: &FeedbackQuery,
    ) -> Result<Vec<InterviewRating>, AppError>;

    async fn finish(self: Box<Self>) -> Result<(), AppError>;
}
