use anyhow::Result;

use table_tennis_ranking::cli::Command;
use table_tennis_ranking::{
    handle_active, handle_completions, handle_leaderboard, handle_matrix, handle_ranks,
    handle_report, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report { input } => handle_report(input),
        Command::Leaderboard { input, period } => handle_leaderboard(input, period),
        Command::Ranks { input, weeks } => handle_ranks(input, *weeks),
        Command::Matrix { input, period } => handle_matrix(input, period),
        Command::Active { input, days } => handle_active(input, *days),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
