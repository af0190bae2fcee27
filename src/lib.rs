pub mod cli;
pub mod config;
pub mod domain;
pub mod normalizer;
pub mod parser;
pub mod rating;
pub mod reports;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::report::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(input: &str) -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run_full_report(input)
}

pub fn handle_leaderboard(input: &str, period: &str) -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run_leaderboard(input, period)
}

pub fn handle_ranks(input: &str, weeks: usize) -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run_ranks(input, weeks)
}

pub fn handle_matrix(input: &str, period: &str) -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run_matrix(input, period)
}

pub fn handle_active(input: &str, days: Option<i64>) -> Result<()> {
    let config = AppConfig::new();
    let service = ReportService::new(config);
    service.run_active(input, days)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
