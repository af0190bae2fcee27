use chrono::NaiveDateTime;
use log::{debug, info};
use serde_json::Value;

use crate::domain::models::{Match, RawRecord};
use crate::normalizer::{NameNormalizer, UNKNOWN_PLAYER};

use super::dates;

/// Accepted column names per logical field, checked in order.
const DATE_COLUMNS: &[&str] = &["Date", "date"];
const TIMESTAMP_COLUMNS: &[&str] = &["Timestamp", "timestamp"];
const WINNER_COLUMNS: &[&str] = &["Winner", "winner"];
const LOSER_COLUMNS: &[&str] = &["Loser", "loser"];
const PLAYER_ONE_COLUMNS: &[&str] = &["Player 1", "Player1", "player 1"];
const PLAYER_TWO_COLUMNS: &[&str] = &["Player 2", "Player2", "player 2"];
const SCORE_COLUMNS: &[&str] = &["Final Score", "Score", "final score", "score"];

/// Converts raw form records into the ordered match history
///
/// Malformed rows never abort a run: a bad date, score or name costs that
/// one record and nothing else.
pub struct RecordParser {
    normalizer: NameNormalizer,
}

impl RecordParser {
    pub fn new(normalizer: NameNormalizer) -> Self {
        Self { normalizer }
    }

    /// Parse every usable record and return matches sorted by date.
    ///
    /// The sort is stable, so records sharing a timestamp keep their input
    /// order.
    pub fn parse(&self, records: &[RawRecord]) -> Vec<Match> {
        let mut matches = Vec::with_capacity(records.len());
        let mut skipped_count = 0;

        for (index, record) in records.iter().enumerate() {
            match self.parse_record(record) {
                Some(parsed) => matches.push(parsed),
                None => {
                    debug!("Dropping malformed record #{index}");
                    skipped_count += 1;
                }
            }
        }

        if skipped_count > 0 {
            info!(
                "Skipped {} malformed records out of {}",
                skipped_count,
                records.len()
            );
        }

        matches.sort_by_key(|m| m.date);
        matches
    }

    fn parse_record(&self, record: &RawRecord) -> Option<Match> {
        let (winner, loser) = self.resolve_players(record)?;
        let date = parse_date(record)?;
        let (winner_sets, loser_sets) = parse_score(lookup(record, SCORE_COLUMNS)?)?;

        Some(Match {
            date,
            winner,
            loser,
            winner_sets,
            loser_sets,
        })
    }

    fn resolve_players(&self, record: &RawRecord) -> Option<(String, String)> {
        let winner = self.normalized(record, WINNER_COLUMNS)?;

        // Either the record names the loser outright, or it lists both
        // players and the loser is whichever one the winner is not.
        let loser = match self.normalized(record, LOSER_COLUMNS) {
            Some(loser) => loser,
            None => self.derive_loser(record, &winner)?,
        };

        if !is_known(&winner) || !is_known(&loser) {
            debug!("Unresolved player in record: {winner:?} vs {loser:?}");
            return None;
        }
        if winner == loser {
            debug!("Both sides normalize to {winner:?}");
            return None;
        }

        Some((winner, loser))
    }

    fn derive_loser(&self, record: &RawRecord, winner: &str) -> Option<String> {
        let one = self.normalized(record, PLAYER_ONE_COLUMNS)?;
        let two = self.normalized(record, PLAYER_TWO_COLUMNS)?;
        if one == two {
            debug!("Player columns both normalize to {one:?}");
            return None;
        }
        if winner == one { Some(two) } else { Some(one) }
    }

    fn normalized(&self, record: &RawRecord, columns: &[&str]) -> Option<String> {
        lookup(record, columns).map(|value| self.normalizer.normalize(value))
    }
}

fn lookup<'a>(record: &'a RawRecord, columns: &[&str]) -> Option<&'a Value> {
    columns.iter().find_map(|name| record.get(*name))
}

/// A non-empty simple date column wins over the timestamp column; records
/// with a malformed simple date drop rather than silently falling back to
/// a timestamp that may disagree with it.
fn parse_date(record: &RawRecord) -> Option<NaiveDateTime> {
    if let Some(simple) = lookup(record, DATE_COLUMNS).and_then(Value::as_str) {
        if !simple.trim().is_empty() {
            return dates::parse_simple_date(simple);
        }
    }

    let stamp = lookup(record, TIMESTAMP_COLUMNS)?.as_str()?;
    dates::parse_timestamp(stamp)
}

/// Parse "3-1" style scores. The winner is credited with the larger count
/// whichever side of the dash it arrived on.
fn parse_score(value: &Value) -> Option<(u32, u32)> {
    let text = value.as_str()?;
    let parts: Vec<&str> = text.split('-').map(str::trim).collect();
    if parts.len() != 2 {
        return None;
    }

    let first: u32 = parts[0].parse().ok()?;
    let second: u32 = parts[1].parse().ok()?;
    Some((first.max(second), first.min(second)))
}

fn is_known(name: &str) -> bool {
    !name.is_empty() && name != UNKNOWN_PLAYER
}
