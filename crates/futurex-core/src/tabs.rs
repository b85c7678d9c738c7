use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsEvent;

/// Top-level site sections, in tab-bar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteTab {
    #[default]
    Overview,
    Leaderboard,
    Sp500,
}

impl SiteTab {
    pub fn label(&self) -> &'static str {
        match self {
            SiteTab::Overview => "Overview",
            SiteTab::Leaderboard => "Leaderboard",
            SiteTab::Sp500 => "S&P 500 Sector",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SiteTab::Overview => "overview",
            SiteTab::Leaderboard => "leaderboard",
            SiteTab::Sp500 => "sp500",
        }
    }

    pub fn all() -> &'static [SiteTab] {
        &[SiteTab::Overview, SiteTab::Leaderboard, SiteTab::Sp500]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.key() == key)
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    /// ArrowRight, wrapping to the first tab.
    pub fn next(&self) -> Self {
        let tabs = Self::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    /// ArrowLeft, wrapping to the last tab.
    pub fn prev(&self) -> Self {
        let tabs = Self::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }

    /// Keyboard navigation for the tab bar; other keys are ignored.
    pub fn on_key(&self, key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(self.next()),
            "ArrowLeft" => Some(self.prev()),
            _ => None,
        }
    }

    pub fn click_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::custom(format!("click_{}", self.key()))
    }
}
