// src/models/score.rs

use serde::{Deserialize, Serialize};

/// One record of the scores collection.
///
/// The id doubles as a coarse submission time (epoch millis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,

    /// Submitter's username; absent for anonymous submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    pub score: i64,
}

/// DTO for submitting a quiz result.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub score: i64,
}
