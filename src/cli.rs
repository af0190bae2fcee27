use clap::{Parser, Subcommand};
use clap_complete::Shell;

const DEFAULT_INPUT: &str = "matches.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "table-tennis club ranking engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Generate the full club report: leaderboards, trend and head-to-head
    Report {
        /// Path to the match records JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,
    },
    /// Print the leaderboard for one period
    Leaderboard {
        /// Path to the match records JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,
        /// One of: weekly, monthly, last_month, all_time
        #[arg(short, long, default_value = "weekly")]
        period: String,
    },
    /// Print rank positions over the trailing weeks
    Ranks {
        /// Path to the match records JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,
        /// How many trailing weeks to reconstruct
        #[arg(short, long, default_value_t = 5)]
        weeks: usize,
    },
    /// Print the head-to-head win matrix
    Matrix {
        /// Path to the match records JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,
        /// One of: weekly, monthly, last_month, all_time
        #[arg(short, long, default_value = "all_time")]
        period: String,
    },
    /// List players with a match in the trailing activity window
    Active {
        /// Path to the match records JSON file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,
        /// Window length in days (defaults to the configured 35)
        #[arg(short, long)]
        days: Option<i64>,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
