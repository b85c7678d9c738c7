//! Leaderboard selection state machine.
//!
//! [`LeaderboardState::reduce`] is a pure transition function over UI state:
//! period type, selected bucket, expanded month groups, sort, filters and the
//! open popover. [`LeaderboardController`] wraps it and keeps an
//! [`OutsidePointer`] listener registered for every open popover.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analytics::Analytics;
use crate::dataset::Dataset;
use crate::period::{self, PeriodType, TimeWindow};
use crate::table::{FilterColumn, FilterConfig, SortConfig, SortField, TableView};

const NO_SELECTION_LABEL: &str = "Select time period";

/// A popover that closes on an outside pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    TimeDropdown,
    Filter(FilterColumn),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SelectPeriod(PeriodType),
    ToggleTimeDropdown,
    ToggleMonth(String),
    SelectWeek(String),
    SelectMonth(String),
    SortBy(SortField),
    ToggleFilterDropdown(FilterColumn),
    ToggleFilterValue { column: FilterColumn, value: String },
    SetFilter { column: FilterColumn, values: Vec<String> },
    ClearFilter(FilterColumn),
    PointerOutside(Region),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardState {
    pub period: PeriodType,
    pub selected_bucket: String,
    pub expanded_months: BTreeSet<String>,
    pub sort: SortConfig,
    pub filter: FilterConfig,
    pub time_dropdown_open: bool,
    pub open_filter: Option<FilterColumn>,
}

impl LeaderboardState {
    /// Initial state: `period` with its latest bucket selected.
    pub fn new(period: PeriodType, window: &TimeWindow) -> Self {
        let empty = Self {
            period,
            selected_bucket: String::new(),
            expanded_months: BTreeSet::new(),
            sort: SortConfig::default(),
            filter: FilterConfig::default(),
            time_dropdown_open: false,
            open_filter: None,
        };
        empty.reduce(&Action::SelectPeriod(period), window)
    }

    pub fn reduce(&self, action: &Action, window: &TimeWindow) -> Self {
        let mut next = self.clone();
        match action {
            Action::SelectPeriod(p) => {
                next.period = *p;
                next.selected_bucket = period::default_bucket(window, *p).unwrap_or_default();
                next.expanded_months.clear();
                if *p == PeriodType::Weekly {
                    next.expanded_months
                        .extend(period::month_of(&next.selected_bucket));
                }
                next.time_dropdown_open = false;
            }
            Action::ToggleTimeDropdown => {
                if self.period != PeriodType::Overall {
                    next.time_dropdown_open = !self.time_dropdown_open;
                    if next.time_dropdown_open {
                        next.open_filter = None;
                    }
                }
            }
            Action::ToggleMonth(month) => {
                if !next.expanded_months.remove(month) {
                    next.expanded_months.insert(month.clone());
                }
            }
            Action::SelectWeek(week) => {
                if self.period == PeriodType::Weekly {
                    next.selected_bucket = week.clone();
                    next.expanded_months.extend(period::month_of(week));
                    next.time_dropdown_open = false;
                }
            }
            Action::SelectMonth(month) => {
                if self.period == PeriodType::Monthly {
                    next.selected_bucket = month.clone();
                    next.time_dropdown_open = false;
                }
            }
            Action::SortBy(field) => {
                next.sort = self.sort.click(*field);
            }
            Action::ToggleFilterDropdown(column) => {
                if self.open_filter == Some(*column) {
                    next.open_filter = None;
                } else {
                    next.open_filter = Some(*column);
                    next.time_dropdown_open = false;
                }
            }
            Action::ToggleFilterValue { column, value } => {
                next.filter.toggle(*column, value);
            }
            Action::SetFilter { column, values } => {
                next.filter.set(*column, values.iter().cloned());
            }
            Action::ClearFilter(column) => {
                next.filter.clear(*column);
            }
            Action::PointerOutside(region) => match region {
                Region::TimeDropdown => next.time_dropdown_open = false,
                Region::Filter(column) => {
                    if self.open_filter == Some(*column) {
                        next.open_filter = None;
                    }
                }
            },
        }
        next
    }

    /// Popovers currently open. At most one at a time.
    pub fn open_regions(&self) -> BTreeSet<Region> {
        let mut regions = BTreeSet::new();
        if self.time_dropdown_open {
            regions.insert(Region::TimeDropdown);
        }
        if let Some(column) = self.open_filter {
            regions.insert(Region::Filter(column));
        }
        regions
    }

    pub fn is_month_expanded(&self, month: &str) -> bool {
        self.expanded_months.contains(month)
    }

    /// Time dropdown button text.
    pub fn selected_label(&self, window: &TimeWindow) -> String {
        match self.period {
            PeriodType::Overall => PeriodType::Overall.label().to_string(),
            PeriodType::Weekly => period::month_options(window)
                .into_iter()
                .flat_map(|m| m.weeks.into_iter().map(move |w| (m.label.clone(), w)))
                .find(|(_, w)| w.value == self.selected_bucket)
                .map(|(month, week)| format!("{} {}", month, week.label))
                .unwrap_or_else(|| NO_SELECTION_LABEL.to_string()),
            PeriodType::Monthly => period::time_options(window, PeriodType::Monthly)
                .into_iter()
                .find(|o| o.value == self.selected_bucket)
                .map(|o| o.label)
                .unwrap_or_else(|| NO_SELECTION_LABEL.to_string()),
        }
    }

    pub fn view(&self, dataset: &Dataset) -> TableView {
        TableView::build(
            dataset,
            self.period,
            &self.selected_bucket,
            &self.filter,
            self.sort,
        )
    }
}

/// Document-level outside-press listener registration, one per open region.
pub trait OutsidePointer {
    fn subscribe(&mut self, region: Region);
    fn unsubscribe(&mut self, region: Region);
}

/// Owns the selection state and keeps outside-press listeners in step with
/// the open popovers. Dropping the controller releases every listener.
pub struct LeaderboardController<P: OutsidePointer> {
    state: LeaderboardState,
    window: TimeWindow,
    pointer: P,
    subscribed: BTreeSet<Region>,
    analytics: Arc<dyn Analytics>,
}

impl<P: OutsidePointer> LeaderboardController<P> {
    pub fn new(
        period: PeriodType,
        window: TimeWindow,
        pointer: P,
        analytics: Arc<dyn Analytics>,
    ) -> Self {
        Self {
            state: LeaderboardState::new(period, &window),
            window,
            pointer,
            subscribed: BTreeSet::new(),
            analytics,
        }
    }

    pub fn state(&self) -> &LeaderboardState {
        &self.state
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    pub fn pointer(&self) -> &P {
        &self.pointer
    }

    pub fn dispatch(&mut self, action: Action) -> &LeaderboardState {
        tracing::debug!(?action, "Leaderboard dispatch");

        if let Action::SelectPeriod(p) = &action {
            self.analytics.track(&p.click_event());
        }

        self.state = self.state.reduce(&action, &self.window);
        self.sync_listeners();
        &self.state
    }

    fn sync_listeners(&mut self) {
        let open = self.state.open_regions();

        for region in self.subscribed.difference(&open) {
            self.pointer.unsubscribe(*region);
        }
        for region in open.difference(&self.subscribed) {
            self.pointer.subscribe(*region);
        }
        self.subscribed = open;
    }
}

impl<P: OutsidePointer> Drop for LeaderboardController<P> {
    fn drop(&mut self) {
        for region in std::mem::take(&mut self.subscribed) {
            self.pointer.unsubscribe(region);
        }
    }
}
