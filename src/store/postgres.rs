// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        attempt::{Attempt, Category, DateWindow},
        feedback::{FeedbackAnswer, FeedbackQuery, InterviewRating},
        talent::TalentProfile,
    },
    store::{AnswerStore, ReadScope},
};

/// PostgreSQL backend. Each read scope is one `REPEATABLE READ` read-only transaction.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerStore for PgStore {
    async fn read_scope(&self) -> Result<Box<dyn ReadScope>, AppError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to open read transaction: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        // Must be the first statement of the transaction.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        Ok(Box::new(PgReadScope { tx }))
    }
}

struct PgReadScope {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ReadScope for PgReadScope {
    async fn tenant_exists(&mut self, tenant_id: Uuid) -> Result<bool, AppError> {
        let found: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM tenants WHERE id = $1 AND deleted_at IS NULL")
                .bind(tenant_id)
                .fetch_optional(&mut *self.tx)
                .await?;

        Ok(found.is_some())
    }

    async fn attempts(
        &mut self,
        tenant_id: Uuid,
        category: Category,
        window: DateWindow,
    ) -> Result<Vec<Attempt>, AppError> {
        let scheduled_on = match category {
            Category::ProblemOfTheDay { date } => Some(date),
            Category::AllTime => None,
        };

        let attempts = sqlx::query_as::<_, Attempt>(
            r#"
            SELECT
                a.talent_id,
                a.question_id,
                a.score,
                a.is_correct,
                a.created_at
            FROM programming_question_attempts a
            JOIN programming_questions q ON q.id = a.question_id AND q.deleted_at IS NULL
            WHERE a.tenant_id = $1
              AND ($2::TIMESTAMPTZ IS NULL OR a.created_at >= $2)
              AND ($3::TIMESTAMPTZ IS NULL OR a.created_at <= $3)
              AND ($4::DATE IS NULL OR EXISTS (
                  SELECT 1 FROM problems_of_the_day p
                  WHERE p.tenant_id = a.tenant_id
                    AND p.question_id = a.question_id
                    AND p.scheduled_on = $4
              ))
            "#,
        )
        .bind(tenant_id)
        .bind(window.from)
        .bind(window.to)
        .bind(scheduled_on)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch attempts: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(attempts)
    }

    async fn talent_profiles(
        &mut self,
        tenant_id: Uuid,
        talent_ids: &[Uuid],
    ) -> Result<Vec<TalentProfile>, AppError> {
        if talent_ids.is_empty() {
            return Ok(Vec::new());
        }

        let profiles = sqlx::query_as::<_, TalentProfile>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                COALESCE(image, '') AS image
            FROM talents
            WHERE tenant_id = $1 AND id = ANY($2) AND deleted_at IS NULL
            "#,
        )
        .bind(tenant_id)
        .bind(talent_ids)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(profiles)
    }

    async fn feedback_answers(
        &mut self,
        query: &FeedbackQuery,
    ) -> Result<Vec<FeedbackAnswer>, AppError> {
        let answers = sqlx::query_as::<_, FeedbackAnswer>(
            r#"
            SELECT
                f.talent_id,
                f.batch_id,
                t.first_name,
                t.last_name,
                g.id AS group_id,
                g.name AS group_name,
                g.display_order AS group_order,
                q.keyword,
                q.id AS question_id,
                q.question_order,
                q.has_options,
                (q.deleted_at IS NOT NULL) AS deleted,
                f.option_key AS chosen_key,
                q.max_score
            FROM talent_batch_feedback f
            JOIN feedback_questions q ON q.id = f.question_id
            JOIN feedback_question_groups g ON g.id = q.group_id AND g.deleted_at IS NULL
            JOIN talents t ON t.id = f.talent_id AND t.deleted_at IS NULL
            JOIN batches b ON b.id = f.batch_id AND b.deleted_at IS NULL
            WHERE f.tenant_id = $1
              AND f.deleted_at IS NULL
              AND ($2::UUID IS NULL OR f.batch_id = $2)
              AND ($3::UUID IS NULL OR f.talent_id = $3)
              AND ($4::UUID IS NULL OR t.source_id = $4)
              AND ($5::UUID IS NULL OR t.sales_person_id = $5)
              AND ($6::TEXT IS NULL OR b.status = $6)
            "#,
        )
        .bind(query.tenant_id)
        .bind(query.batch_id)
        .bind(query.talent_id)
        .bind(query.source_id)
        .bind(query.sales_person_id)
        .bind(query.batch_status.as_deref())
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch feedback answers: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

        Ok(answers)
    }

    async fn interview_ratings(
        &mut self,
        query: &FeedbackQuery,
    ) -> Result<Vec<InterviewRating>, AppError> {
        let ratings = sqlx::query_as::<_, InterviewRating>(
            r#"
            SELECT i.talent_id, i.batch_id, i.rating
            FROM talent_interviews i
            JOIN talents t ON t.id = i.talent_id AND t.deleted_at IS NULL
            JOIN batches b ON b.id = i.batch_id AND b.deleted_at IS NULL
            WHERE i.tenant_id = $1
              AND i.deleted_at IS NULL
              AND i.rating IS NOT NULL
              AND ($2::UUID IS NULL OR i.batch_id = $2)
              AND ($3::UUID IS NULL OR i.talent_id = $3)
              AND ($4::UUID IS NULL OR t.source_id = $4)
              AND ($5::UUID IS NULL OR t.sales_person_id = $5)
              AND ($6::TEXT IS NULL OR b.status = $6)
            "#,
        )
        .bind(query.tenant_id)
        .bind(query.batch_id)
        .bind(query.talent_id)
        .bind(query.source_id)
        .bind(query.sales_person_id)
        .bind(query.batch_status.as_deref())
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(ratings)
    }

    async fn finish(self: Box<Self>) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
