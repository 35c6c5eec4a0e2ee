// src/handlers/import.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    importer,
    models::question::Question,
    store::{self, Collection, Store},
};

/// Bulk-imports questions from an uploaded delimited-text file.
///
/// Reads the file field of the multipart body, parses it row by row and
/// appends the accepted rows to the question collection, which is then
/// persisted wholesale. Responds with the number of rows added, the number
/// skipped and the per-line rejection reasons.
pub async fn import_questions(
    State(store): State<Arc<dyn Store>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.file_name().is_some() || field.name() == Some("file") {
            upload = Some(
                field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            );
            break;
        }
    }

    let upload = upload.ok_or_else(|| AppError::BadRequest("missing file field".to_string()))?;

    let outcome = importer::parse_upload(&upload);
    let added = outcome.questions.len();

    let mut questions: Vec<Question> = store::load(store.as_ref(), Collection::Questions).await;
    questions.extend(outcome.questions);
    store::save(store.as_ref(), Collection::Questions, &questions).await?;

    tracing::info!(
        "Imported {} questions ({} rows rejected)",
        added,
        outcome.errors.len()
    );

    Ok(Json(json!({
        "ok": true,
        "added": added,
        "skipped": outcome.errors.len(),
        "errors": outcome.errors,
    })))
}
