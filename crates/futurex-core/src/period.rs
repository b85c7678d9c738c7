//! Period types, bucket keys and the time option generator.
//!
//! Buckets are generated from a hand-maintained availability window. Every
//! month is treated as exactly [`WEEKS_PER_MONTH`] weeks long; this is not
//! calendar-accurate and is kept that way on purpose so bucket keys stay
//! aligned with the published dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analytics::AnalyticsEvent;
use crate::error::{FutureXError, Result};

/// Fixed week count per month used by bucket generation.
pub const WEEKS_PER_MONTH: u8 = 4;

/// Bucket key used for the all-time leaderboard.
pub const OVERALL_KEY: &str = "overall";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Overall,
    #[default]
    Weekly,
    Monthly,
}

impl PeriodType {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodType::Overall => "Overall",
            PeriodType::Weekly => "Weekly",
            PeriodType::Monthly => "Monthly",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Overall => "overall",
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
        }
    }

    /// Analytics event for a click on this period's toggle.
    pub fn click_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::custom(format!("click_{}", self.as_str()))
    }

    pub fn all() -> &'static [PeriodType] {
        &[PeriodType::Overall, PeriodType::Weekly, PeriodType::Monthly]
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = FutureXError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overall" => Ok(PeriodType::Overall),
            "weekly" | "week" => Ok(PeriodType::Weekly),
            "monthly" | "month" => Ok(PeriodType::Monthly),
            other => Err(FutureXError::Config(format!("unknown period type: {other}"))),
        }
    }
}

pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES
        .get(usize::from(month).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown")
}

pub fn week_label(week: u8) -> String {
    format!("Week {}", week)
}

/// `YYYY-MM`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: u16,
    pub month: u8,
}

impl MonthKey {
    pub fn new(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.year, month_name(self.month))
    }

    /// `None` past December of the last representable year.
    fn next(self) -> Option<Self> {
        if self.month >= 12 {
            self.year.checked_add(1).map(|year| Self::new(year, 1))
        } else {
            Some(Self::new(self.year, self.month + 1))
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = FutureXError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FutureXError::InvalidBucket(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::new(year, month))
    }
}

/// `YYYY-MM-Wn`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: u16,
    pub month: u8,
    pub week: u8,
}

impl WeekKey {
    pub fn new(year: u16, month: u8, week: u8) -> Self {
        Self { year, month, week }
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }

    /// Full label, e.g. `2025 August Week 1`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_key().label(), week_label(self.week))
    }

    /// Label without the year, e.g. `August Week 1`.
    pub fn short_label(&self) -> String {
        format!("{} {}", month_name(self.month), week_label(self.week))
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{}", self.month_key(), self.week)
    }
}

impl FromStr for WeekKey {
    type Err = FutureXError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FutureXError::InvalidBucket(s.to_string());
        let (month, week) = s.rsplit_once("-W").ok_or_else(invalid)?;
        let month: MonthKey = month.parse()?;
        let week: u8 = week.parse().map_err(|_| invalid())?;
        if !(1..=WEEKS_PER_MONTH).contains(&week) {
            return Err(invalid());
        }
        Ok(Self::new(month.year, month.month, week))
    }
}

/// Parent month key (`YYYY-MM`) of a weekly bucket key.
pub fn month_of(week_key: &str) -> Option<String> {
    week_key
        .parse::<WeekKey>()
        .ok()
        .map(|k| k.month_key().to_string())
}

/// Data availability window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_year: u16,
    pub start_month: u8,
    pub start_week: u8,
    pub end_year: u16,
    pub end_month: u8,
    pub end_week: u8,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start_year: 2025,
            start_month: 6,
            start_week: 1,
            end_year: 2026,
            end_month: 2,
            end_week: 2,
        }
    }
}

impl TimeWindow {
    pub fn start(&self) -> MonthKey {
        MonthKey::new(self.start_year, self.start_month)
    }

    pub fn end(&self) -> MonthKey {
        MonthKey::new(self.end_year, self.end_month)
    }

    /// Months covered by the window, oldest first.
    pub fn months(&self) -> Vec<MonthKey> {
        let (start, end) = (self.start(), self.end());
        if !(1..=12).contains(&start.month) || !(1..=12).contains(&end.month) {
            return Vec::new();
        }

        let mut months = Vec::new();
        let mut current = Some(start);
        while let Some(month) = current.filter(|m| *m <= end) {
            months.push(month);
            current = month.next();
        }
        months
    }

    /// Week numbers available in `month`, honouring the start and end week clipping.
    pub fn weeks_in(&self, month: MonthKey) -> Vec<u8> {
        let first = if month == self.start() {
            self.start_week.max(1)
        } else {
            1
        };
        let last = if month == self.end() {
            self.end_week.min(WEEKS_PER_MONTH)
        } else {
            WEEKS_PER_MONTH
        };
        (first..=last).collect()
    }

    pub fn weeks(&self) -> Vec<WeekKey> {
        self.months()
            .into_iter()
            .flat_map(|m| {
                self.weeks_in(m)
                    .into_iter()
                    .map(move |w| WeekKey::new(m.year, m.month, w))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOption {
    pub value: String,
    pub label: String,
}

/// A month group in the cascading weekly picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOption {
    pub value: String,
    pub label: String,
    pub weeks: Vec<TimeOption>,
}

/// Selectable buckets for `period`, chronological ascending.
pub fn time_options(window: &TimeWindow, period: PeriodType) -> Vec<TimeOption> {
    match period {
        PeriodType::Overall => vec![TimeOption {
            value: OVERALL_KEY.to_string(),
            label: PeriodType::Overall.label().to_string(),
        }],
        PeriodType::Weekly => window
            .weeks()
            .into_iter()
            .map(|k| TimeOption {
                value: k.to_string(),
                label: k.label(),
            })
            .collect(),
        PeriodType::Monthly => window
            .months()
            .into_iter()
            .map(|m| TimeOption {
                value: m.to_string(),
                label: m.label(),
            })
            .collect(),
    }
}

/// Month → weeks tree for the two-level weekly picker. Months whose weeks are
/// all clipped away are omitted.
pub fn month_options(window: &TimeWindow) -> Vec<MonthOption> {
    window
        .months()
        .into_iter()
        .filter_map(|m| {
            let weeks: Vec<TimeOption> = window
                .weeks_in(m)
                .into_iter()
                .map(|w| TimeOption {
                    value: WeekKey::new(m.year, m.month, w).to_string(),
                    label: week_label(w),
                })
                .collect();
            (!weeks.is_empty()).then(|| MonthOption {
                value: m.to_string(),
                label: m.label(),
                weeks,
            })
        })
        .collect()
}

/// Latest available bucket for `period`, or `None` when the window is empty.
pub fn default_bucket(window: &TimeWindow, period: PeriodType) -> Option<String> {
    time_options(window, period).pop().map(|o| o.value)
}

/// Human-readable label for a bucket key, falling back to the raw key.
pub fn bucket_label(period: PeriodType, key: &str) -> String {
    match period {
        PeriodType::Overall => PeriodType::Overall.label().to_string(),
        PeriodType::Weekly => key
            .parse::<WeekKey>()
            .map(|k| k.label())
            .unwrap_or_else(|_| key.to_string()),
        PeriodType::Monthly => key
            .parse::<MonthKey>()
            .map(|k| k.label())
            .unwrap_or_else(|_| key.to_string()),
    }
}
