// Domain modules
pub mod analytics;
pub mod config;
pub mod dataset;
pub mod docs;
pub mod entry;
pub mod error;
pub mod fixtures;
pub mod notice;
pub mod period;
pub mod questions;
pub mod selector;
pub mod table;
pub mod tabs;

pub use analytics::{Analytics, AnalyticsEvent, NoopAnalytics, TracingAnalytics};
pub use config::{AnalyticsConfig, NoticeConfig, SiteConfig};
pub use dataset::Dataset;
pub use docs::{Block, Inline, TocItem};
pub use entry::{LeaderboardEntry, TestType};
pub use error::{FutureXError, Result};
pub use notice::{FlagStore, MemoryFlags, Notice};
pub use period::{
    MonthKey, MonthOption, PeriodType, TimeOption, TimeWindow, WeekKey, OVERALL_KEY,
    WEEKS_PER_MONTH,
};
pub use questions::{Level, QuestionBank, QuestionEntry};
pub use selector::{Action, LeaderboardController, LeaderboardState, OutsidePointer, Region};
pub use table::{
    EmptyState, FacetOption, FilterColumn, FilterConfig, Medal, RankedRow, SortConfig,
    SortDirection, SortField, SortIndicator, TableView,
};
pub use tabs::SiteTab;

/// Everything a page needs, loaded once from the bundled fixtures.
#[derive(Debug, Clone, Default)]
pub struct Site {
    pub config: SiteConfig,
    pub dataset: Dataset,
    pub questions: QuestionBank,
}

impl Site {
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            config: SiteConfig::bundled()?,
            dataset: Dataset::bundled()?,
            questions: QuestionBank::bundled()?,
        })
    }
}
