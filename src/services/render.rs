use colored::Colorize;

use crate::reports::head_to_head::HeadToHeadMatrix;
use crate::reports::history::RankHistory;
use crate::reports::leaderboard::Leaderboard;

const NAME_WIDTH: usize = 20;

/// One-time legend explaining the table columns.
pub fn metrics_legend() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Ranking Metrics".bold()));
    out.push_str("  Score    = Elo rating + 10 * wins + 3 * set difference\n");
    out.push_str("  Elo      starts at 1500 and moves with every result; upsets move more points\n");
    out.push_str("  Set diff = sets won minus sets lost inside the period\n");
    out
}

pub fn leaderboard_table(board: &Leaderboard) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("{} Leaderboard", board.period_label).bold()
    ));
    out.push_str(&format!(
        "{:<4} {:<NAME_WIDTH$} {:>6} {:>6} {:>7} {:>4} {:>8}\n",
        "Rank", "Player", "Elo", "Score", "Matches", "Wins", "Set Diff"
    ));
    for row in &board.rows {
        out.push_str(&format!(
            "{:<4} {:<NAME_WIDTH$} {:>6} {:>6} {:>7} {:>4} {:>8}\n",
            row.rank, row.player, row.rating, row.score, row.matches, row.wins, row.set_diff
        ));
    }
    out
}

pub fn no_data_message(period_label: &str) -> String {
    format!(
        "No matches played for the period: {}.",
        period_label.to_lowercase()
    )
}

/// Rank-over-time table. `players` selects and orders the rows; a "-" cell
/// means the player had no history by that week's boundary.
pub fn rank_history_table(history: &RankHistory, players: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Ranking Trend (1 = top of the table)".bold()));

    out.push_str(&format!("{:<NAME_WIDTH$}", "Player"));
    for week in &history.weeks {
        out.push_str(&format!(" {:>14}", week.label));
    }
    out.push('\n');

    for player in players {
        out.push_str(&format!("{:<NAME_WIDTH$}", player));
        for week in 0..history.weeks.len() {
            let cell = match history.rank(player, week) {
                0 => "-".to_string(),
                rank => rank.to_string(),
            };
            out.push_str(&format!(" {:>14}", cell));
        }
        out.push('\n');
    }
    out
}

/// Head-to-head grid, wins of the row player over the column player.
pub fn matrix_table(matrix: &HeadToHeadMatrix) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        "Head-to-Head Wins (row beats column)".bold()
    ));

    out.push_str(&format!("{:<NAME_WIDTH$}", ""));
    for name in &matrix.players {
        out.push_str(&format!(" {:>12}", truncated(name)));
    }
    out.push('\n');

    for (i, name) in matrix.players.iter().enumerate() {
        out.push_str(&format!("{:<NAME_WIDTH$}", name));
        for j in 0..matrix.players.len() {
            let cell = if i == j {
                "-".to_string()
            } else {
                matrix.wins[[i, j]].to_string()
            };
            out.push_str(&format!(" {:>12}", cell));
        }
        out.push('\n');
    }
    out
}

fn truncated(name: &str) -> String {
    if name.len() > 12 {
        name.chars().take(12).collect()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::RatingSettings;
    use crate::domain::models::Match;
    use crate::domain::period::Period;
    use crate::rating::RatingEngine;
    use crate::reports::{head_to_head, history, leaderboard};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample_matches() -> Vec<Match> {
        vec![
            Match {
                date: at(19),
                winner: "Alice".to_string(),
                loser: "Bob".to_string(),
                winner_sets: 3,
                loser_sets: 1,
            },
            Match {
                date: at(20),
                winner: "Bob".to_string(),
                loser: "Alice".to_string(),
                winner_sets: 3,
                loser_sets: 2,
            },
        ]
    }

    #[test]
    fn leaderboard_table_lists_every_row() {
        colored::control::set_override(false);
        let matches = sample_matches();
        let engine = RatingEngine::from_matches(&matches, &RatingSettings::default());
        let board =
            leaderboard::build(&matches, &engine, &Period::AllTime.window(at(22))).unwrap();

        let table = leaderboard_table(&board);

        assert!(table.contains("All-Time Leaderboard"));
        assert!(table.contains("Alice"));
        assert!(table.contains("Bob"));
        assert!(table.contains("Set Diff"));
    }

    #[test]
    fn rank_history_table_marks_missing_weeks() {
        colored::control::set_override(false);
        // Carol never plays, so every cell in her row is "-".
        let matches = sample_matches();
        let hist = history::weekly_ranks(&matches, &RatingSettings::default(), 2, at(22));

        let players = vec!["Alice".to_string(), "Carol".to_string()];
        let table = rank_history_table(&hist, &players);

        let carol_line = table.lines().find(|l| l.starts_with("Carol")).unwrap();
        assert!(carol_line.contains('-'));
        assert!(!carol_line.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn matrix_table_blanks_the_diagonal() {
        colored::control::set_override(false);
        let matches = sample_matches();
        let matrix =
            head_to_head::build(&matches, &Period::AllTime.window(at(22))).unwrap();

        let table = matrix_table(&matrix);
        let alice_line = table.lines().find(|l| l.starts_with("Alice")).unwrap();

        assert!(alice_line.contains('-'));
        assert!(alice_line.contains('1'));
    }

    #[test]
    fn no_data_message_names_the_period() {
        assert_eq!(
            no_data_message("This Week's"),
            "No matches played for the period: this week's."
        );
    }
}
