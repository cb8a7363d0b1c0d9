// src/store/memory.rs

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use chrono::NaiveDate;
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

/// Talent as known to the in-memory directory.
#[derive(Debug, Clone, Default)]
pub struct TalentRecord {
    pub profile: TalentProfile,
    pub source_id: Option<Uuid>,
    pub sales_person_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
struct Dataset {
    tenants: HashSet<Uuid>,
    talents: HashMap<(Uuid, Uuid), TalentRecord>,
    /// (tenant, question) -> dates the question was problem of the day.
    questions: HashMap<(Uuid, Uuid), Vec<NaiveDate>>,
    batches: HashMap<(Uuid, Uuid), String>,
    attempts: Vec<(Uuid, Attempt)>,
    feedback: Vec<(Uuid, FeedbackAnswer)>,
    interviews: Vec<(Uuid, InterviewRating)>,
}

/// In-process backend used by tests and local runs without a database.
///
/// A read scope holds an `Arc` to the dataset as it was when the scope
/// opened; writes copy the dataset and never disturb open scopes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<Arc<Dataset>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self) -> Arc<Dataset> {
        let guard = self.data.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    fn update(&self, f: impl FnOnce(&mut Dataset)) {
        let mut guard = self.data.write().unwrap_or_else(|e| e.into_inner());
        f(Arc::make_mut(&mut *guard));
    }

    pub fn insert_tenant(&self, tenant_id: Uuid) {
        self.update(|d| {
            d.tenants.insert(tenant_id);
        });
    }

    pub fn insert_talent(&self, tenant_id: Uuid, record: TalentRecord) {
        self.update(|d| {
            d.talents.insert((tenant_id, record.profile.id), record);
        });
    }

    /// Registers a programming question, optionally scheduled as problem of the day.
    pub fn insert_question(&self, tenant_id: Uuid, question_id: Uuid, problem_of_the_day: Option<NaiveDate>) {
        self.update(|d| {
            let dates = d.questions.entry((tenant_id, question_id)).or_default();
            if let Some(date) = problem_of_the_day {
                dates.push(date);
            }
        });
    }

    pub fn insert_batch(&self, tenant_id: Uuid, batch_id: Uuid, status: &str) {
        self.update(|d| {
            d.batches.insert((tenant_id, batch_id), status.to_string());
        });
    }

    pub fn record_attempt(&self, tenant_id: Uuid, attempt: Attempt) {
        self.update(|d| d.attempts.push((tenant_id, attempt)));
    }

    pub fn record_feedback(&self, tenant_id: Uuid, answer: FeedbackAnswer) {
        self.update(|d| d.feedback.push((tenant_id, answer)));
    }

    pub fn record_interview(&self, tenant_id: Uuid, rating: InterviewRating) {
        self.update(|d| d.interviews.push((tenant_id, rating)));
    }
}

#[async_trait]
impl AnswerStore for MemoryStore {
    async fn read_scope(&self) -> Result<Box<dyn ReadScope>, AppError> {
        Ok(Box::new(MemoryReadScope {
            data: self.snapshot(),
        }))
    }
}

struct MemoryReadScope {
    data: Arc<Dataset>,
}

impl MemoryReadScope {
    fn matches_feedback_filters(&self, query: &FeedbackQuery, talent_id: Uuid, batch_id: Uuid) -> bool {
        if query.batch_id.is_some_and(|id| id != batch_id) {
            return false;
        }
        if query.talent_id.is_some_and(|id| id != talent_id) {
            return false;
        }

        let Some(status) = self.data.batches.get(&(query.tenant_id, batch_id)) else {
            return false;
        };
        if query.batch_status.as_ref().is_some_and(|s| s != status) {
            return false;
        }

        let Some(talent) = self.data.talents.get(&(query.tenant_id, talent_id)) else {
            return false;
        };
        if query.source_id.is_some() && query.source_id != talent.source_id {
            return false;
        }
        if query.sales_person_id.is_some() && query.sales_person_id != talent.sales_person_id {
            return false;
        }

        true
    }
}

#[async_trait]
impl ReadScope for MemoryReadScope {
    async fn tenant_exists(&mut self, tenant_id: Uuid) -> Result<bool, AppError> {
        Ok(self.data.tenants.contains(&tenant_id))
    }

    async fn attempts(
        &mut self,
        tenant_id: Uuid,
        category: Category,
        window: DateWindow,
    ) -> Result<Vec<Attempt>, AppError> {
        let attempts = self
            .data
            .attempts
            .iter()
            .filter(|(tenant, _)| *tenant == tenant_id)
            .map(|(_, attempt)| attempt)
            .filter(|attempt| {
                let Some(dates) = self.data.questions.get(&(tenant_id, attempt.question_id)) else {
                    return false;
                };
                match category {
                    Category::ProblemOfTheDay { date } => dates.contains(&date),
                    Category::AllTime => true,
                }
            })
            .filter(|attempt| window.contains(attempt.created_at))
            .cloned()
            .collect();

        Ok(attempts)
    }

    async fn talent_profiles(
        &mut self,
        tenant_id: Uuid,
        talent_ids: &[Uuid],
    ) -> Result<Vec<TalentProfile>, AppError> {
        Ok(talent_ids
            .iter()
            .filter_map(|id| self.data.talents.get(&(tenant_id, *id)))
            .map(|record| record.profile.clone())
            .collect())
    }

    async fn feedback_answers(
        &mut self,
        query: &FeedbackQuery,
    ) -> Result<Vec<FeedbackAnswer>, AppError> {
        Ok(self
            .data
            .feedback
            .iter()
            .filter(|(tenant, _)| *tenant == query.tenant_id)
            .map(|(_, answer)| answer)
            .filter(|answer| self.matches_feedback_filters(query, answer.talent_id, answer.batch_id))
            .cloned()
            .collect())
    }

    async fn interview_ratings(
        &mut self,
        query: &FeedbackQuery,
    ) -> Result<Vec<InterviewRating>, AppError> {
        Ok(self
            .data
            .interviews
            .iter()
            .filter(|(tenant, _)| *tenant == query.tenant_id)
            .map(|(_, rating)| *rating)
            .filter(|rating| self.matches_feedback_filters(query, rating.talent_id, rating.batch_id))
            .collect())
    }

    async fn finish(self: Box<Self>) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn attempt(talent_id: Uuid, question_id: Uuid, score: i64) -> Attempt {
        Attempt {
            talent_id,
            question_id,
            score,
            is_correct: score > 0,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn open_scope_does_not_see_later_writes() {
        let store = MemoryStore::new();
        let tenant = Uuid::new_v4();
        let question = Uuid::new_v4();
        let talent = Uuid::new_v4();
        store.insert_tenant(tenant);
        store.insert_question(tenant, question, None);
        store.record_attempt(tenant, attempt(talent, question, 5));

        let mut scope = store.read_scope().await.unwrap();
        store.record_attempt(tenant, attempt(talent, question, 9));

        let seen = scope.attempts(tenant, Category::AllTime, DateWindow::default()).await.unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].score, 5);

        let mut fresh = store.read_scope().await.unwrap();
        let seen = fresh.attempts(tenant, Category::AllTime, DateWindow::default()).await.unwrap();
        assert_eq!(seen.len(), 2);
    }

    #[tokio::test]
    async fn attempts_are_scoped_by_tenant_and_category() {
        let store = MemoryStore::new();
        let tenant = Uuid::new_v4();
        let other_tenant = Uuid::new_v4();
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let potd = Uuid::new_v4();
        let regular = Uuid::new_v4();
        let talent = Uuid::new_v4();

        store.insert_question(tenant, potd, Some(today));
        store.insert_question(tenant, regular, None);
        store.insert_question(other_tenant, potd, Some(today));
        store.record_attempt(tenant, attempt(talent, potd, 4));
        store.record_attempt(tenant, attempt(talent, regular, 7));
        store.record_attempt(other_tenant, attempt(talent, potd, 10));

        let mut scope = store.read_scope().await.unwrap();
        let potd_only = scope
            .attempts(tenant, Category::ProblemOfTheDay { date: today }, DateWindow::default())
            .await
            .unwrap();
        assert_eq!(potd_only.len(), 1);
        assert_eq!(potd_only[0].score, 4);

        let all = scope.attempts(tenant, Category::AllTime, DateWindow::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
