pub mod activity;
pub mod head_to_head;
pub mod history;
pub mod leaderboard;

pub use activity::active_players;
pub use head_to_head::HeadToHeadMatrix;
pub use history::{RankHistory, WeekSnapshot};
pub use leaderboard::{Leaderboard, LeaderboardRow};
