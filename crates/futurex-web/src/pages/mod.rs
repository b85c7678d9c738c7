pub mod finance;
pub mod leaderboard;
pub mod overview;
