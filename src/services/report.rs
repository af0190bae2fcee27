use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Utc};
use log::info;
use std::fs;

use crate::config::settings::AppConfig;
use crate::domain::models::{Match, RawRecord};
use crate::domain::period::Period;
use crate::normalizer::NameNormalizer;
use crate::parser::RecordParser;
use crate::rating::RatingEngine;
use crate::reports::{activity, head_to_head, history, leaderboard};
use crate::services::render;

pub struct ReportService {
    config: AppConfig,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The full club report: legend, period leaderboards, ranking trend for
    /// active players and the all-time head-to-head grid.
    pub fn run_full_report(&self, input: &str) -> Result<()> {
        info!("=== Starting Report Generation ===\n");

        let matches = self.load_matches(input)?;
        let now = current_time();

        // Step 1: One engine over the complete history backs every
        // leaderboard's rating column.
        let engine = RatingEngine::from_matches(&matches, &self.config.rating);
        info!(
            "  → Rated {} players over {} matches\n",
            engine.ratings().len(),
            matches.len()
        );

        // Step 2: Period leaderboards.
        println!("{}", render::metrics_legend());
        self.print_leaderboard(&matches, &engine, Period::Weekly, now);
        self.print_leaderboard(&matches, &engine, Period::Monthly, now);

        // Final standings of the previous month, shown while the new month
        // is young enough for them to still be news.
        if now.day() <= self.config.reports.last_month_grace_days {
            self.print_leaderboard(&matches, &engine, Period::LastMonth, now);
        }

        // Step 3: Ranking trend and head-to-head.
        self.print_progression(&matches, now);
        self.print_matrix(&matches, Period::AllTime, now);

        info!("=== Report Generation Complete ===");
        Ok(())
    }

    pub fn run_leaderboard(&self, input: &str, period_name: &str) -> Result<()> {
        let period = Period::parse(period_name)?;
        let matches = self.load_matches(input)?;
        let engine = RatingEngine::from_matches(&matches, &self.config.rating);
        self.print_leaderboard(&matches, &engine, period, current_time());
        Ok(())
    }

    pub fn run_ranks(&self, input: &str, weeks: usize) -> Result<()> {
        let matches = self.load_matches(input)?;
        let history = history::weekly_ranks(&matches, &self.config.rating, weeks, current_time());

        if history.is_empty() {
            println!("No rank history yet.");
        } else {
            println!("{}", render::rank_history_table(&history, &history.players));
        }
        Ok(())
    }

    pub fn run_matrix(&self, input: &str, period_name: &str) -> Result<()> {
        let period = Period::parse(period_name)?;
        let matches = self.load_matches(input)?;
        self.print_matrix(&matches, period, current_time());
        Ok(())
    }

    pub fn run_active(&self, input: &str, days: Option<i64>) -> Result<()> {
        let matches = self.load_matches(input)?;
        let window_days = days.unwrap_or(self.config.reports.active_window_days);
        let active = activity::active_players(&matches, current_time(), window_days);

        if active.is_empty() {
            println!("No players active in the last {window_days} days.");
        } else {
            println!("Active in the last {window_days} days:");
            for player in &active {
                println!("  {player}");
            }
        }
        Ok(())
    }

    fn load_matches(&self, input: &str) -> Result<Vec<Match>> {
        let records = load_records(input)?;
        info!("  → Loaded {} raw records from {}\n", records.len(), input);

        let normalizer = NameNormalizer::from_settings(&self.config.names);
        let parser = RecordParser::new(normalizer);
        let matches = parser.parse(&records);
        info!("  → Parsed {} valid matches\n", matches.len());

        Ok(matches)
    }

    fn print_leaderboard(
        &self,
        matches: &[Match],
        engine: &RatingEngine,
        period: Period,
        now: NaiveDateTime,
    ) {
        let window = period.window(now);
        match leaderboard::build(matches, engine, &window) {
            Some(board) => println!("{}", render::leaderboard_table(&board)),
            None => println!("{}\n", render::no_data_message(&window.label)),
        }
    }

    fn print_progression(&self, matches: &[Match], now: NaiveDateTime) {
        let active =
            activity::active_players(matches, now, self.config.reports.active_window_days);
        if active.is_empty() {
            info!("No active players; skipping ranking trend");
            return;
        }

        let history = history::weekly_ranks(
            matches,
            &self.config.rating,
            self.config.reports.trailing_weeks,
            now,
        );
        if history.is_empty() {
            return;
        }

        let players: Vec<String> = active.into_iter().collect();
        println!("{}", render::rank_history_table(&history, &players));
    }

    fn print_matrix(&self, matches: &[Match], period: Period, now: NaiveDateTime) {
        let window = period.window(now);
        match head_to_head::build(matches, &window) {
            Some(matrix) => println!("{}", render::matrix_table(&matrix)),
            None => println!(
                "Not enough players for a head-to-head grid: {}.",
                window.label.to_lowercase()
            ),
        }
    }
}

fn current_time() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Read the records file: a JSON array of objects, one per submitted match.
fn load_records(path: &str) -> Result<Vec<RawRecord>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read records file {path}"))?;

    let records: Vec<RawRecord> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse records JSON in {path}"))?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ttr_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_and_parses_a_records_file() {
        let path = temp_file(
            "records.json",
            r#"[
                {"Date": "8/18/2025", "Player 1": "alice", "Player 2": "bob",
                 "Winner": "alice", "Final Score": "3-1"},
                {"Date": "bogus", "Player 1": "x", "Player 2": "y",
                 "Winner": "x", "Final Score": "3-0"}
            ]"#,
        );

        let service = ReportService::new(AppConfig::new());
        let matches = service.load_matches(path.to_str().unwrap()).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].winner, "Alice");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_a_contextual_error() {
        let err = load_records("/nonexistent/records.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read records file"));
    }

    #[test]
    fn invalid_json_is_a_contextual_error() {
        let path = temp_file("broken.json", "{ not json");

        let err = load_records(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse records JSON"));

        fs::remove_file(path).unwrap();
    }
}
