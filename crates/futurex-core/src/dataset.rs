//! Static leaderboard dataset and the bucket accessor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::entry::LeaderboardEntry;
use crate::error::Result;
use crate::fixtures;
use crate::period::PeriodType;

/// `{ overall: [...], weekly: { key: [...] }, monthly: { key: [...] } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub overall: Vec<LeaderboardEntry>,
    #[serde(default)]
    pub weekly: BTreeMap<String, Vec<LeaderboardEntry>>,
    #[serde(default)]
    pub monthly: BTreeMap<String, Vec<LeaderboardEntry>>,
}

impl Dataset {
    /// Parse a dataset document. Every bucket is ranked by overall score,
    /// highest first, before it is handed out; `entries` never reorders.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut dataset: Dataset = serde_json::from_str(json)?;
        dataset.rank_by_overall();

        tracing::debug!(
            overall = dataset.overall.len(),
            weekly_buckets = dataset.weekly.len(),
            monthly_buckets = dataset.monthly.len(),
            "Leaderboard dataset loaded"
        );
        Ok(dataset)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(fixtures::LEADERBOARD_JSON)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn rank_by_overall(&mut self) {
        let by_overall =
            |a: &LeaderboardEntry, b: &LeaderboardEntry| b.overall_score.total_cmp(&a.overall_score);

        self.overall.sort_by(by_overall);
        self.weekly
            .values_mut()
            .chain(self.monthly.values_mut())
            .for_each(|entries| entries.sort_by(by_overall));
    }

    /// Entries for a bucket in stored order. `overall` ignores `bucket`;
    /// an unknown weekly or monthly key yields `None`.
    pub fn entries(&self, period: PeriodType, bucket: &str) -> Option<&[LeaderboardEntry]> {
        match period {
            PeriodType::Overall => Some(self.overall.as_slice()),
            PeriodType::Weekly => self.weekly.get(bucket).map(Vec::as_slice),
            PeriodType::Monthly => self.monthly.get(bucket).map(Vec::as_slice),
        }
    }

    /// Stored bucket keys for a period, in key order.
    pub fn buckets(&self, period: PeriodType) -> Vec<&str> {
        match period {
            PeriodType::Overall => vec![crate::period::OVERALL_KEY],
            PeriodType::Weekly => self.weekly.keys().map(String::as_str).collect(),
            PeriodType::Monthly => self.monthly.keys().map(String::as_str).collect(),
        }
    }
}
