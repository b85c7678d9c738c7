use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FutureXError, Result};
use crate::fixtures;
use crate::period::{PeriodType, TimeWindow, WEEKS_PER_MONTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub window: TimeWindow,
    #[serde(default)]
    pub default_period: PeriodType,
    #[serde(default = "default_undisclosed_models")]
    pub undisclosed_models: Vec<String>,
    #[serde(default)]
    pub notice: NoticeConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            window: TimeWindow::default(),
            default_period: PeriodType::default(),
            undisclosed_models: default_undisclosed_models(),
            notice: NoticeConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

fn default_undisclosed_models() -> Vec<String> {
    ["Manus", "OpenAI-Deepreasearch", "Genspark"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The site config compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(fixtures::SITE_JSON)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading site config");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.window;
        for (name, month) in [("start_month", w.start_month), ("end_month", w.end_month)] {
            if !(1..=12).contains(&month) {
                return Err(FutureXError::Config(format!(
                    "{name} must be between 1 and 12, got {month}"
                )));
            }
        }
        for (name, week) in [("start_week", w.start_week), ("end_week", w.end_week)] {
            if !(1..=WEEKS_PER_MONTH).contains(&week) {
                return Err(FutureXError::Config(format!(
                    "{name} must be between 1 and {WEEKS_PER_MONTH}, got {week}"
                )));
            }
        }
        if (w.start(), w.start_week) > (w.end(), w.end_week) {
            return Err(FutureXError::Config(format!(
                "window starts at {}-W{} after it ends at {}-W{}",
                w.start(),
                w.start_week,
                w.end(),
                w.end_week
            )));
        }
        if self.notice.enabled && self.notice.storage_key.is_empty() {
            return Err(FutureXError::Config(
                "notice.storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeConfig {
    pub enabled: bool,
    pub storage_key: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            storage_key: "futurex_spring_festival_2026_notice_dismissed".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub app_id: u32,
    pub channel: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            app_id: 635684,
            channel: "cn".to_string(),
        }
    }
}
