// src/handlers/scores.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    error::AppError,
    models::score::{Score, SubmitScoreRequest},
    store::{self, Collection, Store},
    utils::jwt::Claims,
};

/// Records an authenticated quiz result, stamped with the submitter's
/// username from the verified token.
pub async fn submit_score(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    append_score(store.as_ref(), Some(claims.username), req).await?;

    Ok(Json(json!({ "ok": true })))
}

/// Records an anonymous quiz result (no identity stamp).
pub async fn submit_score_anon(
    State(store): State<Arc<dyn Store>>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    append_score(store.as_ref(), None, req).await?;

    Ok(Json(json!({ "ok": true })))
}

async fn append_score(
    store: &dyn Store,
    user: Option<String>,
    req: SubmitScoreRequest,
) -> Result<(), AppError> {
    let mut scores: Vec<Score> = store::load(store, Collection::Scores).await;

    scores.push(Score {
        id: chrono::Utc::now().timestamp_millis(),
        user,
        score: req.score,
    });

    store::save(store, Collection::Scores, &scores).await
}

/// Retrieves the top 20 scores, descending.
///
/// Ties keep their relative submission order (stable sort).
pub async fn get_leaderboard(
    State(store): State<Arc<dyn Store>>,
) -> Result<impl IntoResponse, AppError> {
    let mut scores: Vec<Score> = store::load(store.as_ref(), Collection::Scores).await;

    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(20);

    Ok(Json(scores))
}
