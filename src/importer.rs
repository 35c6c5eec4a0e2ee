// src/importer.rs

use rand::Rng;
use serde::Serialize;

use crate::models::question::{Level, Question};

/// Fields per row: id, level, prompt, four options, correct index, explanation.
const FIELDS: usize = 9;

/// Result of parsing one uploaded batch.
#[derive(Debug)]
pub struct ImportOutcome {
    pub questions: Vec<Question>,
    pub errors: Vec<RowError>,
}

/// A rejected row, with its 1-based line number and the reason.
#[derive(Debug, Serialize, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub reason: String,
}

/// Parses an uploaded question batch, one comma-separated record per line.
///
/// Rows are validated rather than coerced: a wrong field count, an unknown
/// level tag or a non-numeric/out-of-range correct index rejects the row with
/// a per-line error and the import continues with the next line. There is no
/// quoting support, so an embedded comma in a text field surfaces as a
/// field-count mismatch. Blank lines are skipped.
///
/// Each accepted row gets a fresh id derived from the current time; the id
/// column of the upload is ignored.
pub fn parse_upload(text: &str) -> ImportOutcome {
    let mut questions = Vec::new();
    let mut errors = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_row(line) {
            Ok(question) => questions.push(question),
            Err(reason) => errors.push(RowError {
                line: idx + 1,
                reason,
            }),
        }
    }

    ImportOutcome { questions, errors }
}

fn parse_row(line: &str) -> Result<Question, String> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return Err(format!(
            "expected {} comma-separated fields, got {}",
            FIELDS,
            parts.len()
        ));
    }

    // An empty level tag defaults to A1; a non-empty unknown tag is an error.
    let level = match parts[1] {
        "" => Level::A1,
        tag => tag
            .parse::<Level>()
            .map_err(|_| format!("unknown level '{}'", tag))?,
    };

    let answer: u32 = parts[7]
        .parse()
        .map_err(|_| format!("correct index '{}' is not a number", parts[7]))?;
    if answer > 3 {
        return Err(format!("correct index {} out of range 0..=3", answer));
    }

    Ok(Question {
        id: fresh_id(),
        level,
        prompt: parts[2].to_string(),
        options: parts[3..7].iter().map(|o| o.to_string()).collect(),
        answer,
        explanation: parts[8].to_string(),
    })
}

/// Epoch-millis id with a random sub-millisecond component, so rows parsed in
/// the same millisecond stay distinct.
fn fresh_id() -> i64 {
    let millis = chrono::Utc::now().timestamp_millis();
    millis * 1000 + rand::thread_rng().gen_range(0..1000)
}
