use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use futurex_core::{
    Action, Analytics, FilterColumn, LeaderboardController, NoopAnalytics, OutsidePointer,
    PeriodType, Region, TimeWindow,
};
use serde_json::Value;

#[derive(Default)]
struct Listeners {
    active: BTreeSet<Region>,
    subscribes: usize,
    unsubscribes: usize,
}

/// Records listener traffic in a shared log that outlives the controller.
#[derive(Clone, Default)]
struct FakePointer(Rc<RefCell<Listeners>>);

impl OutsidePointer for FakePointer {
    fn subscribe(&mut self, region: Region) {
        let mut log = self.0.borrow_mut();
        assert!(log.active.insert(region), "double subscribe for {region:?}");
        log.subscribes += 1;
    }

    fn unsubscribe(&mut self, region: Region) {
        let mut log = self.0.borrow_mut();
        assert!(log.active.remove(&region), "unsubscribe without subscribe for {region:?}");
        log.unsubscribes += 1;
    }
}

#[derive(Default)]
struct RecordingAnalytics(Mutex<Vec<(String, Value)>>);

impl Analytics for RecordingAnalytics {
    fn emit(&self, event: &str, props: &Value) {
        self.0.lock().unwrap().push((event.to_string(), props.clone()));
    }
}

fn controller(pointer: FakePointer) -> LeaderboardController<FakePointer> {
    LeaderboardController::new(
        PeriodType::Weekly,
        TimeWindow::default(),
        pointer,
        Arc::new(NoopAnalytics),
    )
}

#[test]
fn opening_popover_subscribes_and_closing_unsubscribes() {
    let pointer = FakePointer::default();
    let mut ctl = controller(pointer.clone());

    ctl.dispatch(Action::ToggleTimeDropdown);
    assert_eq!(
        pointer.0.borrow().active.iter().copied().collect::<Vec<_>>(),
        vec![Region::TimeDropdown]
    );

    ctl.dispatch(Action::PointerOutside(Region::TimeDropdown));
    let log = pointer.0.borrow();
    assert!(log.active.is_empty());
    assert_eq!(log.subscribes, log.unsubscribes);
}

#[test]
fn switching_popovers_swaps_listeners() {
    let pointer = FakePointer::default();
    let mut ctl = controller(pointer.clone());

    ctl.dispatch(Action::ToggleFilterDropdown(FilterColumn::ModelName));
    ctl.dispatch(Action::ToggleFilterDropdown(FilterColumn::AgentFramework));

    let log = pointer.0.borrow();
    assert_eq!(
        log.active.iter().copied().collect::<Vec<_>>(),
        vec![Region::Filter(FilterColumn::AgentFramework)]
    );
    assert_eq!(log.subscribes, 2);
    assert_eq!(log.unsubscribes, 1);
}

#[test]
fn non_popover_actions_leave_listeners_alone() {
    let pointer = FakePointer::default();
    let mut ctl = controller(pointer.clone());

    ctl.dispatch(Action::ToggleFilterDropdown(FilterColumn::ModelName));
    ctl.dispatch(Action::ToggleFilterValue {
        column: FilterColumn::ModelName,
        value: "GPT-5".into(),
    });
    ctl.dispatch(Action::SortBy(futurex_core::SortField::Level1Score));

    let log = pointer.0.borrow();
    assert_eq!(log.subscribes, 1);
    assert_eq!(log.unsubscribes, 0);
}

#[test]
fn drop_releases_every_listener() {
    let pointer = FakePointer::default();
    {
        let mut ctl = controller(pointer.clone());
        ctl.dispatch(Action::ToggleTimeDropdown);
        assert_eq!(pointer.0.borrow().active.len(), 1);
    }

    let log = pointer.0.borrow();
    assert!(log.active.is_empty());
    assert_eq!(log.subscribes, 1);
    assert_eq!(log.unsubscribes, 1);
}

#[test]
fn period_clicks_are_reported() {
    let analytics = Arc::new(RecordingAnalytics::default());
    let mut ctl = LeaderboardController::new(
        PeriodType::Weekly,
        TimeWindow::default(),
        FakePointer::default(),
        analytics.clone(),
    );

    ctl.dispatch(Action::SelectPeriod(PeriodType::Monthly));
    ctl.dispatch(Action::SortBy(futurex_core::SortField::OverallScore));

    let events = analytics.0.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, "crawl_api_custom");
    assert_eq!(events[0].1["name"], "click_monthly");
    assert_eq!(ctl.state().selected_bucket, "2026-02");
}
