pub mod contact;
pub mod header;
pub mod leaderboard_table;
pub mod markdown;
pub mod nav;
pub mod notice;
pub mod question_table;
pub mod time_selector;
