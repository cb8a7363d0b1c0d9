// src/handlers/leaderboard.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::Config,
    error::AppError,
    handlers::open_tenant_scope,
    models::{
        attempt::{Category, DateWindow, LeaderboardQuery},
        leaderboard::{AllTimeParams, Leaderboard, ProblemOfTheDayParams},
    },
    scoring::build_leaderboard,
    store::AnswerStore,
    utils::jwt::Claims,
};

async fn leaderboard_for(
    store: &dyn AnswerStore,
    config: &Config,
    query: LeaderboardQuery,
) -> Result<Json<Leaderboard>, AppError> {
    let mut scope = open_tenant_scope(store, query.tenant_id).await?;
    let leaderboard = build_leaderboard(scope.as_mut(), &query, config.leaderboard_size).await?;
    scope.finish().await?;

    tracing::info!(
        tenant_id = %query.tenant_id,
        talent_id = %query.talent_id,
        rank = leaderboard.self_performer.rank,
        "leaderboard served"
    );

    Ok(Json(leaderboard))
}

/// Problem-of-the-day leaderboard for the calling talent.
///
/// `searchDate` picks the day; today (UTC) when omitted.
pub async fn problem_of_the_day(
    State(store): State<Arc<dyn AnswerStore>>,
    State(config): State<Config>,
    Extension(claims): Extension<Claims>,
    Path(tenant_id): Path<Uuid>,
    Query(params): Query<ProblemOfTheDayParams>,
) -> Result<impl IntoResponse, AppError> {
    let date = params.search_date.unwrap_or_else(|| Utc::now().date_naive());
    let query = LeaderboardQuery::new(
        tenant_id,
        claims.talent_id(),
        Category::ProblemOfTheDay { date },
        DateWindow::default(),
    )?;

    leaderboard_for(store.as_ref(), &config, query).await
}

/// All-time programming question leaderboard, optionally limited to a window.
pub async fn all_time(
    State(store): State<Arc<dyn AnswerStore>>,
    State(config): State<Config>,
    Extension(claims): Extension<Claims>,
    Path(tenant_id): Path<Uuid>,
    Query(params): Query<AllTimeParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = LeaderboardQuery::new(
        tenant_id,
        claims.talent_id(),
        Category::AllTime,
        DateWindow {
            from: params.from,
            to: params.to,
        },
    )?;

    leaderboard_for(store.as_ref(), &config, query).await
}
