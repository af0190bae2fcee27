use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use log::debug;
use serde::Serialize;

use crate::config::settings::RatingSettings;
use crate::domain::models::Match;
use crate::domain::period::{end_of_day, monday_of};
use crate::rating::RatingEngine;

/// Standings as of one week's Sunday-night boundary.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSnapshot {
    pub label: String,
    pub end_of_week: NaiveDateTime,
    /// Dense 1-based rank per player with history by this boundary.
    pub ranks: BTreeMap<String, u32>,
}

/// Rank positions per player across the trailing weeks, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct RankHistory {
    /// Every player in the full history, sorted; the row axis when the
    /// table is rendered.
    pub players: Vec<String>,
    pub weeks: Vec<WeekSnapshot>,
}

impl RankHistory {
    /// Rank of `player` at week `week`, or 0 for a player with no match
    /// history by that boundary.
    pub fn rank(&self, player: &str, week: usize) -> u32 {
        self.weeks
            .get(week)
            .and_then(|snapshot| snapshot.ranks.get(player))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

/// Reconstruct standings at each of the trailing `num_weeks` week ends.
///
/// Ratings are path dependent, so there is no way to "rewind" the current
/// engine; every boundary replays its history prefix through a fresh one.
/// Cost is O(weeks * matches), fine at club scale. Weeks with no matches
/// yet are skipped rather than rendered empty.
pub fn weekly_ranks(
    matches: &[Match],
    config: &RatingSettings,
    num_weeks: usize,
    now: NaiveDateTime,
) -> RankHistory {
    let players = all_players(matches);
    let mut weeks = Vec::with_capacity(num_weeks);

    for weeks_back in (0..num_weeks).rev() {
        let boundary = week_end(now - Duration::weeks(weeks_back as i64));
        let prefix: Vec<Match> = matches
            .iter()
            .filter(|m| m.date <= boundary)
            .cloned()
            .collect();

        if prefix.is_empty() {
            debug!("No matches by {boundary}; skipping snapshot");
            continue;
        }

        let engine = RatingEngine::from_matches(&prefix, config);
        weeks.push(WeekSnapshot {
            label: week_label(boundary),
            end_of_week: boundary,
            ranks: rank_by_rating(&engine),
        });
    }

    RankHistory { players, weeks }
}

fn all_players(matches: &[Match]) -> Vec<String> {
    let mut players: Vec<String> = matches
        .iter()
        .flat_map(|m| [m.winner.clone(), m.loser.clone()])
        .collect();
    players.sort();
    players.dedup();
    players
}

fn rank_by_rating(engine: &RatingEngine) -> BTreeMap<String, u32> {
    let mut standings: Vec<(&String, i32)> = engine
        .ratings()
        .iter()
        .map(|(name, &rating)| (name, rating))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    standings
        .into_iter()
        .enumerate()
        .map(|(position, (name, _))| (name.clone(), position as u32 + 1))
        .collect()
}

/// Sunday 23:59:59 of the week containing `reference`.
fn week_end(reference: NaiveDateTime) -> NaiveDateTime {
    end_of_day(monday_of(reference.date()) + Duration::days(6))
}

/// Week number plus the Monday the week starts on.
fn week_label(boundary: NaiveDateTime) -> String {
    let monday = boundary.date() - Duration::days(6);
    monday.format("Wk %U (%b %d)").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn beat(winner: &str, loser: &str, date: NaiveDateTime) -> Match {
        Match {
            date,
            winner: winner.to_string(),
            loser: loser.to_string(),
            winner_sets: 3,
            loser_sets: 0,
        }
    }

    fn config() -> RatingSettings {
        RatingSettings::default()
    }

    #[test]
    fn boundaries_are_sunday_nights_oldest_first() {
        // 2025-08-20 is a Wednesday; its week ends Sunday 2025-08-24.
        let now = at(8, 20, 15);
        let matches = vec![beat("Alice", "Bob", at(8, 4, 12))];

        let history = weekly_ranks(&matches, &config(), 3, now);

        let boundaries: Vec<NaiveDateTime> =
            history.weeks.iter().map(|w| w.end_of_week).collect();
        assert_eq!(
            boundaries,
            vec![
                at(8, 10, 0) + Duration::seconds(86399),
                at(8, 17, 0) + Duration::seconds(86399),
                at(8, 24, 0) + Duration::seconds(86399),
            ]
        );
    }

    #[test]
    fn labels_name_the_monday_the_week_starts() {
        let now = at(8, 20, 15);
        let matches = vec![beat("Alice", "Bob", at(8, 18, 12))];

        let history = weekly_ranks(&matches, &config(), 1, now);

        assert_eq!(history.weeks.len(), 1);
        assert!(history.weeks[0].label.contains("Aug 18"));
        assert!(history.weeks[0].label.starts_with("Wk "));
    }

    #[test]
    fn weeks_without_history_are_skipped() {
        let now = at(8, 20, 15);
        // The only match happened this week, so earlier boundaries see
        // nothing at all.
        let matches = vec![beat("Alice", "Bob", at(8, 19, 12))];

        let history = weekly_ranks(&matches, &config(), 4, now);

        assert_eq!(history.weeks.len(), 1);
        assert!(history.weeks[0].label.contains("Aug 18"));
    }

    #[test]
    fn snapshots_only_know_players_seen_by_their_boundary() {
        let matches = vec![
            beat("Alice", "Bob", at(8, 5, 12)),  // week ending Aug 10
            beat("Carol", "Alice", at(8, 19, 12)), // week ending Aug 24
        ];
        let history = weekly_ranks(&matches, &config(), 3, at(8, 20, 15));

        // Weeks: Aug 10, Aug 17 (same prefix), Aug 24.
        assert_eq!(history.weeks.len(), 3);
        assert_eq!(history.rank("Carol", 0), 0);
        assert_eq!(history.rank("Carol", 1), 0);
        assert_ne!(history.rank("Carol", 2), 0);
        // The all-time universe still lists everyone.
        assert_eq!(history.players, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn ranks_are_dense_and_ordered_by_rating() {
        let matches = vec![
            beat("Alice", "Bob", at(8, 18, 10)),
            beat("Alice", "Carol", at(8, 18, 11)),
            beat("Carol", "Bob", at(8, 19, 10)),
        ];
        let history = weekly_ranks(&matches, &config(), 1, at(8, 20, 15));

        let ranks = &history.weeks[0].ranks;
        assert_eq!(ranks["Alice"], 1);
        assert_eq!(ranks["Carol"], 2);
        assert_eq!(ranks["Bob"], 3);
    }

    #[test]
    fn tied_ratings_rank_alphabetically() {
        // Two disjoint pairs: both winners end on 1516, both losers on 1484.
        let matches = vec![
            beat("Zoe", "Yves", at(8, 18, 10)),
            beat("Ada", "Ben", at(8, 18, 11)),
        ];
        let history = weekly_ranks(&matches, &config(), 1, at(8, 20, 15));

        let ranks = &history.weeks[0].ranks;
        assert_eq!(ranks["Ada"], 1);
        assert_eq!(ranks["Zoe"], 2);
        assert_eq!(ranks["Ben"], 3);
        assert_eq!(ranks["Yves"], 4);
    }

    #[test]
    fn latest_snapshot_agrees_with_the_all_time_leaderboard() {
        use crate::domain::period::Period;
        use crate::reports::leaderboard;

        // Score order and rating order coincide for this history, so the
        // two views must rank everyone identically.
        let matches = vec![
            beat("Alice", "Bob", at(8, 18, 10)),
            beat("Alice", "Bob", at(8, 18, 11)),
            beat("Alice", "Carol", at(8, 19, 10)),
            Match {
                date: at(8, 19, 11),
                winner: "Carol".to_string(),
                loser: "Bob".to_string(),
                winner_sets: 3,
                loser_sets: 1,
            },
        ];
        let now = at(8, 22, 20);

        let history = weekly_ranks(&matches, &config(), 1, now);
        let boundary = history.weeks[0].end_of_week;

        let prefix: Vec<Match> = matches
            .iter()
            .filter(|m| m.date <= boundary)
            .cloned()
            .collect();
        let engine = RatingEngine::from_matches(&prefix, &config());
        let board =
            leaderboard::build(&prefix, &engine, &Period::AllTime.window(boundary)).unwrap();

        for row in &board.rows {
            assert_eq!(
                history.weeks[0].ranks[&row.player] as usize,
                row.rank,
                "rank mismatch for {}",
                row.player
            );
        }
    }

    #[test]
    fn no_matches_means_no_snapshots() {
        let history = weekly_ranks(&[], &config(), 5, at(8, 20, 15));
        assert!(history.is_empty());
        assert!(history.players.is_empty());
    }
}
