//! YAML loader for puzzle files.
//!
//! # Format
//! ```yaml
//! card1:
//!   description: "Position 12: Morphy vs. Duke Karl"
//!   fen: 4kb1r/p2n1ppp/4q3/4p1B1/4P3/1Q6/PPP2PPP/2KR4 w k - 1 0
//!   solution: 1. Qb8+ Nxb8 2. Rd8#
//!   difficulty: hard
//!   tags: morphy opera_game
//!
//! card2:
//!   fen: ...
//! ```
//!
//! Every top-level key is a record label; its value holds the fields. An
//! entry that fails validation is reported on its own and does not stop the
//! rest of the file from loading.

use crate::error::{LoadError, RecordError};
use crate::types::{Difficulty, PuzzleRecord};
use serde::Deserialize;
use serde_yaml_ng::Value;

/// Outcome of loading one puzzle file.
#[derive(Debug, Clone, Default)]
pub struct LoadedFile {
    /// One outcome per entry, in file order.
    pub outcomes: Vec<Result<PuzzleRecord, RecordError>>,
    pub report: LoadReport,
}

impl LoadedFile {
    pub fn records(&self) -> impl Iterator<Item = &PuzzleRecord> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &RecordError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }
}

/// Stub statistics for a loaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadReport {
    pub entries: usize,
    pub complete: usize,
    pub solution_without_position: usize,
    pub position_without_solution: usize,
    /// Entries with neither a position nor a solution (unfilled template stubs).
    pub blank: usize,
}

#[derive(Debug, Default, Deserialize)]
struct RawPuzzle {
    #[serde(alias = "position")]
    fen: Option<String>,
    description: Option<String>,
    instructions: Option<String>,
    solution: Option<String>,
    difficulty: Option<String>,
    #[serde(alias = "tag")]
    tags: Option<TagsField>,
    check_move_agreement: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagsField {
    Text(String),
    List(Vec<String>),
}

impl TagsField {
    fn into_tags(self) -> Vec<String> {
        let parts = match self {
            Self::Text(text) => vec![text],
            Self::List(list) => list,
        };
        let mut tags: Vec<String> = Vec::new();
        for tag in parts.iter().flat_map(|p| p.split_whitespace()) {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}

/// Parse puzzle file content.
pub fn parse(content: &str) -> Result<LoadedFile, LoadError> {
    if content.trim().is_empty() {
        return Ok(LoadedFile::default());
    }

    let document: Value =
        serde_yaml_ng::from_str(content).map_err(|e| LoadError::Format(e.to_string()))?;

    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(LoadedFile::default()),
        other => {
            return Err(LoadError::Format(format!(
                "expected a mapping of labels to puzzles, found {}",
                value_kind(&other)
            )))
        }
    };

    let mut loaded = LoadedFile::default();
    for (key, value) in mapping {
        let label = label_for(&key);
        loaded.report.entries += 1;
        let outcome = build_record(&label, value, &mut loaded.report);
        if outcome.is_ok() {
            loaded.report.complete += 1;
        }
        loaded.outcomes.push(outcome);
    }

    Ok(loaded)
}

fn build_record(
    label: &str,
    value: Value,
    report: &mut LoadReport,
) -> Result<PuzzleRecord, RecordError> {
    let raw = match value {
        Value::Null => RawPuzzle::default(),
        value => serde_yaml_ng::from_value::<RawPuzzle>(value)
            .map_err(|e| RecordError::validation(label, format!("malformed entry: {e}")))?,
    };

    let position = non_blank(raw.fen);
    let solution = non_blank(raw.solution);

    let (position, solution) = match (position, solution) {
        (Some(position), Some(solution)) => (position, solution),
        (None, Some(_)) => {
            report.solution_without_position += 1;
            return Err(missing_field(label, "fen"));
        }
        (Some(_), None) => {
            report.position_without_solution += 1;
            return Err(missing_field(label, "solution"));
        }
        (None, None) => {
            report.blank += 1;
            return Err(RecordError::validation(
                label,
                "missing required fields `fen` and `solution`",
            ));
        }
    };

    let difficulty = match non_blank(raw.difficulty) {
        Some(text) => Difficulty::from_str(&text).ok_or_else(|| {
            RecordError::validation(
                label,
                format!("invalid difficulty {text:?} (expected easy or hard)"),
            )
        })?,
        None => Difficulty::default(),
    };

    Ok(PuzzleRecord {
        label: label.to_string(),
        position,
        description: non_blank(raw.description).unwrap_or_default(),
        instructions: non_blank(raw.instructions),
        solution,
        difficulty,
        tags: raw.tags.map(TagsField::into_tags).unwrap_or_default(),
        check_move_agreement: raw.check_move_agreement.unwrap_or(true),
    })
}

fn missing_field(label: &str, field: &str) -> RecordError {
    RecordError::validation(label, format!("missing required field `{field}`"))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn label_for(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| value_kind(other).to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// YAML skeleton with `count` empty entries, for filling in by hand.
pub fn template(count: usize) -> String {
    let mut out = String::new();
    for n in 1..=count {
        out.push_str(&format!("card{n}:\n"));
        out.push_str("  description: \"Position :\"\n");
        out.push_str("  fen:\n");
        out.push_str("  instructions:\n");
        out.push_str("  solution:\n");
        out.push_str("  difficulty:\n");
        out.push_str("  tags:\n\n");
    }
    out
}
