use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A raw record as delivered by the form export: arbitrary column names
/// mapped to arbitrary JSON values.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// One completed match
///
/// Immutable once parsed; `winner_sets` always holds the larger of the two
/// set counts regardless of which side of the score it arrived on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub date: NaiveDateTime,
    pub winner: String,
    pub loser: String,
    pub winner_sets: u32,
    pub loser_sets: u32,
}
