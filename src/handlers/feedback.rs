// src/handlers/feedback.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    handlers::open_tenant_scope,
    models::feedback::{FeedbackDashboardParams, TalentFeedbackParams},
    scoring::{feedback_report, talent_feedback},
    store::AnswerStore,
};

/// Batch feedback dashboard: talents grouped into Outstanding / Good / Average.
pub async fn dashboard(
    State(store): State<Arc<dyn AnswerStore>>,
    Path(tenant_id): Path<Uuid>,
    Query(params): Query<FeedbackDashboardParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;
    let query = params.into_query(tenant_id);

    let mut scope = open_tenant_scope(store.as_ref(), tenant_id).await?;
    let report = feedback_report(scope.as_mut(), &query).await?;
    scope.finish().await?;

    Ok(Json(report))
}

/// Feedback summaries of a single talent.
pub async fn talent_summary(
    State(store): State<Arc<dyn AnswerStore>>,
    Path((tenant_id, talent_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<TalentFeedbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let mut scope = open_tenant_scope(store.as_ref(), tenant_id).await?;
    let summaries = talent_feedback(scope.as_mut(), tenant_id, talent_id, params.batch_id).await?;
    scope.finish().await?;

    Ok(Json(summaries))
}
