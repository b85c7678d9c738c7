//! Fixtures compiled into every binary that links the core crate.

pub const LEADERBOARD_JSON: &str = include_str!("../../../data/leaderboard.json");
pub const QUESTIONS_JSON: &str = include_str!("../../../data/questions.json");
pub const SITE_JSON: &str = include_str!("../../../data/site.json");
pub const OVERVIEW_MD: &str = include_str!("../../../data/overview.md");
pub const FINANCE_MD: &str = include_str!("../../../data/finance.md");
