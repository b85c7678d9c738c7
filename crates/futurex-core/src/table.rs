//! Sort and filter engine for the leaderboard table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dataset::Dataset;
use crate::entry::{masked_model_name, LeaderboardEntry};
use crate::period::{PeriodType, WeekKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    OverallScore,
    Level1Score,
    Level2Score,
    Level3Score,
    Level4Score,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::OverallScore => "Overall Score",
            SortField::Level1Score => "Level 1",
            SortField::Level2Score => "Level 2",
            SortField::Level3Score => "Level 3",
            SortField::Level4Score => "Level 4",
        }
    }

    pub fn all() -> &'static [SortField] {
        &[
            SortField::OverallScore,
            SortField::Level1Score,
            SortField::Level2Score,
            SortField::Level3Score,
            SortField::Level4Score,
        ]
    }

    pub fn value(&self, entry: &LeaderboardEntry) -> f64 {
        match self {
            SortField::OverallScore => entry.overall_score,
            SortField::Level1Score => entry.level1_score,
            SortField::Level2Score => entry.level2_score,
            SortField::Level3Score => entry.level3_score,
            SortField::Level4Score => entry.level4_score,
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = crate::error::FutureXError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overall" | "overallscore" => Ok(SortField::OverallScore),
            "level1" | "level1score" => Ok(SortField::Level1Score),
            "level2" | "level2score" => Ok(SortField::Level2Score),
            "level3" | "level3score" => Ok(SortField::Level3Score),
            "level4" | "level4score" => Ok(SortField::Level4Score),
            other => Err(crate::error::FutureXError::Config(format!(
                "unknown sort field: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Header glyph state for a sortable column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortIndicator {
    Inactive,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Inactive => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active with descending order.
    pub fn click(self, field: SortField) -> Self {
        if self.field == Some(field) {
            Self::by(field, self.direction.toggled())
        } else {
            Self::by(field, SortDirection::Desc)
        }
    }

    pub fn indicator(&self, field: SortField) -> SortIndicator {
        match (self.field == Some(field), self.direction) {
            (false, _) => SortIndicator::Inactive,
            (true, SortDirection::Asc) => SortIndicator::Ascending,
            (true, SortDirection::Desc) => SortIndicator::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterColumn {
    ModelName,
    AgentFramework,
}

impl FilterColumn {
    pub fn label(&self) -> &'static str {
        match self {
            FilterColumn::ModelName => "Model",
            FilterColumn::AgentFramework => "Agent Framework",
        }
    }

    pub fn all() -> &'static [FilterColumn] {
        &[FilterColumn::ModelName, FilterColumn::AgentFramework]
    }

    pub fn value<'a>(&self, entry: &'a LeaderboardEntry) -> &'a str {
        match self {
            FilterColumn::ModelName => &entry.model_name,
            FilterColumn::AgentFramework => &entry.agent_framework,
        }
    }

    /// Text shown for a filter value; undisclosed model names stay hidden.
    pub fn display_value<'a>(&self, value: &'a str, undisclosed: &[String]) -> &'a str {
        match self {
            FilterColumn::ModelName => masked_model_name(value, undisclosed),
            FilterColumn::AgentFramework => value,
        }
    }
}

/// One checkbox in a filter popover: `value` is the filter key, `label` the text shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

/// Checkbox filter sets. An empty set matches every value of its column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub model_name: BTreeSet<String>,
    pub agent_framework: BTreeSet<String>,
}

impl FilterConfig {
    pub fn values(&self, column: FilterColumn) -> &BTreeSet<String> {
        match column {
            FilterColumn::ModelName => &self.model_name,
            FilterColumn::AgentFramework => &self.agent_framework,
        }
    }

    fn values_mut(&mut self, column: FilterColumn) -> &mut BTreeSet<String> {
        match column {
            FilterColumn::ModelName => &mut self.model_name,
            FilterColumn::AgentFramework => &mut self.agent_framework,
        }
    }

    pub fn matches(&self, entry: &LeaderboardEntry) -> bool {
        FilterColumn::all().iter().all(|&column| {
            let set = self.values(column);
            set.is_empty() || set.contains(column.value(entry))
        })
    }

    pub fn toggle(&mut self, column: FilterColumn, value: &str) {
        let set = self.values_mut(column);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    pub fn set(&mut self, column: FilterColumn, values: impl IntoIterator<Item = String>) {
        *self.values_mut(column) = values.into_iter().collect();
    }

    pub fn clear(&mut self, column: FilterColumn) {
        self.values_mut(column).clear();
    }

    pub fn is_active(&self, column: FilterColumn) -> bool {
        !self.values(column).is_empty()
    }

    /// Dropdown button text: `All`, the single value, or `n selected`.
    pub fn summary(&self, column: FilterColumn, undisclosed: &[String]) -> String {
        let set = self.values(column);
        match set.len() {
            0 => "All".to_string(),
            1 => set
                .iter()
                .next()
                .map(|v| column.display_value(v, undisclosed).to_string())
                .unwrap_or_default(),
            n => format!("{} selected", n),
        }
    }
}

pub fn filter_entries<'a>(
    entries: &'a [LeaderboardEntry],
    filter: &FilterConfig,
) -> Vec<&'a LeaderboardEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

/// Stable sort; without a field the input order is kept.
pub fn sort_entries(entries: &mut [&LeaderboardEntry], sort: SortConfig) {
    let Some(field) = sort.field else {
        return;
    };
    entries.sort_by(|a, b| {
        let ord = field.value(a).total_cmp(&field.value(b));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Filter then sort. The source slice is left untouched.
pub fn apply<'a>(
    entries: &'a [LeaderboardEntry],
    filter: &FilterConfig,
    sort: SortConfig,
) -> Vec<&'a LeaderboardEntry> {
    let mut rows = filter_entries(entries, filter);
    sort_entries(&mut rows, sort);
    rows
}

/// Distinct values of `column`, sorted, for the checkbox dropdown.
pub fn facet_values(entries: &[LeaderboardEntry], column: FilterColumn) -> Vec<String> {
    entries
        .iter()
        .map(|e| column.value(e).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Filter popover options, keyed by raw value and labelled for display.
pub fn facet_options(
    entries: &[LeaderboardEntry],
    column: FilterColumn,
    undisclosed: &[String],
) -> Vec<FacetOption> {
    facet_values(entries, column)
        .into_iter()
        .map(|value| FacetOption {
            label: column.display_value(&value, undisclosed).to_string(),
            value,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Medal::Gold => "medal-gold",
            Medal::Silver => "medal-silver",
            Medal::Bronze => "medal-bronze",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub medal: Option<Medal>,
    pub entry: LeaderboardEntry,
}

/// Copy shown when a bucket has no data at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    pub hint: String,
}

impl EmptyState {
    pub fn for_period(period: PeriodType, dataset: &Dataset) -> Self {
        let title = "No Data Available".to_string();
        if period == PeriodType::Monthly {
            return Self {
                title,
                message: "Monthly data is not available yet. Please try selecting Weekly view to see available data.".to_string(),
                hint: "Monthly data will be available in the future. Currently only Weekly data is available.".to_string(),
            };
        }

        let available: Vec<String> = dataset
            .buckets(PeriodType::Weekly)
            .into_iter()
            .filter_map(|key| key.parse::<WeekKey>().ok())
            .map(|key| key.short_label())
            .collect();

        Self {
            title,
            message: "There is currently no leaderboard data available for the selected time period. Please try selecting a different time range.".to_string(),
            hint: format!("Weekly data is available for: {}", available.join(", ")),
        }
    }
}

pub const NO_MATCHES_MESSAGE: &str = "No data matches the filter criteria";

/// What the table body shows for the current selection.
#[derive(Clone, Debug, PartialEq)]
pub enum TableView {
    NoData(EmptyState),
    NoMatches,
    Rows(Vec<RankedRow>),
}

impl TableView {
    pub fn build(
        dataset: &Dataset,
        period: PeriodType,
        bucket: &str,
        filter: &FilterConfig,
        sort: SortConfig,
    ) -> Self {
        let entries = match dataset.entries(period, bucket) {
            Some(entries) if !entries.is_empty() => entries,
            _ => return TableView::NoData(EmptyState::for_period(period, dataset)),
        };

        let rows = apply(entries, filter, sort);
        if rows.is_empty() {
            return TableView::NoMatches;
        }

        TableView::Rows(
            rows.into_iter()
                .enumerate()
                .map(|(i, entry)| RankedRow {
                    rank: i + 1,
                    medal: Medal::for_rank(i + 1),
                    entry: entry.clone(),
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[RankedRow] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

/// `1234567` → `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_overall(score: f64) -> String {
    format!("{:.1}", score)
}

/// Shortest form: `45` for whole numbers, `45.5` otherwise.
pub fn format_level(score: f64) -> String {
    format!("{}", score)
}
