//! Sample prediction questions shown under the leaderboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FutureXError, Result};
use crate::fixtures;

/// Difficulty level, stored as `"Level n"` in the fixture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    #[default]
    L1,
    L2,
    L3,
    L4,
}

impl Level {
    pub fn all() -> &'static [Level] {
        &[Level::L1, Level::L2, Level::L3, Level::L4]
    }

    pub fn number(&self) -> u8 {
        match self {
            Level::L1 => 1,
            Level::L2 => 2,
            Level::L3 => 3,
            Level::L4 => 4,
        }
    }

    pub fn label(&self) -> String {
        format!("Level {}", self.number())
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::all().get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn empty_message(&self) -> String {
        format!("No questions found for {}", self.label())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.number())
    }
}

impl FromStr for Level {
    type Err = FutureXError;

    /// Accepts `Level 2`, `level2` and `2`.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered.trim_start_matches("level").trim();
        digits
            .parse::<u8>()
            .ok()
            .and_then(Level::from_number)
            .ok_or_else(|| FutureXError::Config(format!("unknown level: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub level: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl QuestionEntry {
    pub fn is_open_ended(&self) -> bool {
        self.options.is_empty()
    }

    /// CSS modifier derived from the level text, e.g. `3` for `Level 3`.
    pub fn level_number(&self) -> &str {
        self.level.trim_start_matches("Level ").trim()
    }
}

pub const OPEN_ENDED_LABEL: &str = "Open-ended question";

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<QuestionEntry>,
}

impl QuestionBank {
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<QuestionEntry> = serde_json::from_str(json)?;
        tracing::debug!(count = questions.len(), "Question bank loaded");
        Ok(Self { questions })
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json(fixtures::QUESTIONS_JSON)
    }

    pub fn all(&self) -> &[QuestionEntry] {
        &self.questions
    }

    /// Questions whose level text is exactly `Level n`, in stored order.
    pub fn for_level(&self, level: Level) -> Vec<&QuestionEntry> {
        let label = level.label();
        self.questions.iter().filter(|q| q.level == label).collect()
    }
}
