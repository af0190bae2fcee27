use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::Match;
use crate::domain::period::PeriodWindow;
use crate::rating::RatingEngine;

/// Score bonus per match won inside the window.
const WIN_BONUS: i32 = 10;
/// Score bonus per point of set difference inside the window.
const SET_DIFF_BONUS: i32 = 3;

/// One leaderboard entry. `rank` is the 1-based table position.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player: String,
    pub rating: i32,
    pub score: i32,
    pub matches: u32,
    pub wins: u32,
    pub set_diff: i32,
}

/// A ranked table for one period, labelled for display.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub period_label: String,
    pub rows: Vec<LeaderboardRow>,
}

/// Per-player totals accumulated over the window.
#[derive(Debug, Default)]
struct WindowStats {
    matches: u32,
    wins: u32,
    sets_won: u32,
    sets_lost: u32,
}

/// Build the ranked table for `window`, or `None` when nobody played in it.
///
/// The rating column always comes from the full-history engine; only the
/// match statistics are window-scoped. Score is rating plus flat bonuses
/// for wins and set difference.
pub fn build(
    matches: &[Match],
    engine: &RatingEngine,
    window: &PeriodWindow,
) -> Option<Leaderboard> {
    let stats = accumulate(matches, window);
    if stats.is_empty() {
        return None;
    }

    let mut rows: Vec<LeaderboardRow> = stats
        .into_iter()
        .map(|(player, stats)| {
            let rating = engine.rating(&player);
            let set_diff = stats.sets_won as i32 - stats.sets_lost as i32;
            LeaderboardRow {
                rank: 0, // assigned after sorting
                score: rating + WIN_BONUS * stats.wins as i32 + SET_DIFF_BONUS * set_diff,
                player,
                rating,
                matches: stats.matches,
                wins: stats.wins,
                set_diff,
            }
        })
        .collect();

    // Stable sort: equal scores keep the BTreeMap's name order.
    rows.sort_by_key(|row| Reverse(row.score));
    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position + 1;
    }

    Some(Leaderboard {
        period_label: window.label.clone(),
        rows,
    })
}

fn accumulate(matches: &[Match], window: &PeriodWindow) -> BTreeMap<String, WindowStats> {
    let mut stats: BTreeMap<String, WindowStats> = BTreeMap::new();

    for m in matches.iter().filter(|m| window.contains(m.date)) {
        let winner = stats.entry(m.winner.clone()).or_default();
        winner.matches += 1;
        winner.wins += 1;
        winner.sets_won += m.winner_sets;
        winner.sets_lost += m.loser_sets;

        let loser = stats.entry(m.loser.clone()).or_default();
        loser.matches += 1;
        loser.sets_won += m.loser_sets;
        loser.sets_lost += m.winner_sets;
    }

    stats
}
