use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime};

use crate::domain::models::Match;

/// Players with at least one match in the trailing `window_days`, sorted.
/// The cutoff is inclusive: a match exactly `window_days` old still counts.
pub fn active_players(matches: &[Match], now: NaiveDateTime, window_days: i64) -> BTreeSet<String> {
    let cutoff = now - Duration::days(window_days);

    let mut active = BTreeSet::new();
    for m in matches.iter().filter(|m| m.date >= cutoff) {
        active.insert(m.winner.clone());
        active.insert(m.loser.clone());
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn beat(winner: &str, loser: &str, date: NaiveDateTime) -> Match {
        Match {
            date,
            winner: winner.to_string(),
            loser: loser.to_string(),
            winner_sets: 3,
            loser_sets: 2,
        }
    }

    #[test]
    fn both_sides_of_a_recent_match_are_active() {
        let matches = vec![
            beat("Alice", "Bob", at(8, 19)),
            beat("Carol", "Dave", at(6, 1)),
        ];
        let active = active_players(&matches, at(8, 22), 35);

        assert_eq!(
            active.into_iter().collect::<Vec<_>>(),
            vec!["Alice", "Bob"]
        );
    }

    #[test]
    fn cutoff_is_inclusive() {
        let matches = vec![beat("Alice", "Bob", at(7, 18))];

        // Exactly 35 days before now, same time of day.
        assert_eq!(active_players(&matches, at(8, 22), 35).len(), 2);
        assert!(active_players(&matches, at(8, 23), 35).is_empty());
    }

    #[test]
    fn no_matches_means_nobody_is_active() {
        assert!(active_players(&[], at(8, 22), 35).is_empty());
    }
}
