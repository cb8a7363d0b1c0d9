// src/routes.rs

use axum::{Router, http::Method, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{feedback, leaderboard},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the application router.
///
/// * Leaderboard routes identify the caller from the bearer token.
/// * Feedback dashboards are read by staff tools and take ids from the path.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let leaderboard_routes = Router::new()
        .route(
            "/api/tenants/{tenant_id}/leaderboard/problem-of-the-day",
            get(leaderboard::problem_of_the_day),
        )
        .route(
            "/api/tenants/{tenant_id}/leaderboard/all-time",
            get(leaderboard::all_time),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let feedback_routes = Router::new()
        .route(
            "/api/tenants/{tenant_id}/feedback/dashboard",
            get(feedback::dashboard),
        )
        .route(
            "/api/tenants/{tenant_id}/talents/{talent_id}/feedback",
            get(feedback::talent_summary),
        );

    Router::new()
        .merge(leaderboard_routes)
        .merge(feedback_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
