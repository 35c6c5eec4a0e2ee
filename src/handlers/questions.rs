// src/handlers/questions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::question::Question,
    store::{self, Collection, Store},
};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub level: Option<String>,
}

/// Lists questions filtered by an exact level match.
///
/// A missing level parameter defaults to "A1"; the sentinel "ALL" returns the
/// full collection unfiltered. An unknown level tag matches nothing.
pub async fn list_questions(
    State(store): State<Arc<dyn Store>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let level = params.level.unwrap_or_else(|| "A1".to_string());

    let all: Vec<Question> = store::load(store.as_ref(), Collection::Questions).await;

    let filtered: Vec<Question> = if level == "ALL" {
        all
    } else {
        all.into_iter()
            .filter(|q| q.level.as_str() == level)
            .collect()
    };

    Ok(Json(filtered))
}

/// Returns the persisted questions document verbatim for download.
pub async fn export_questions(
    State(store): State<Arc<dyn Store>>,
) -> Result<impl IntoResponse, AppError> {
    let body = store
        .read_document(Collection::Questions)
        .await
        .ok_or_else(|| AppError::NotFound("Questions collection not found".to_string()))?;

    let headers = [
        (header::CONTENT_TYPE, "application/json"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"questions.json\"",
        ),
    ];

    Ok((headers, body))
}
