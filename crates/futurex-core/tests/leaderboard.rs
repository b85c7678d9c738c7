use futurex_core::period::{self, month_options, time_options};
use futurex_core::table::{apply, filter_entries, NO_MATCHES_MESSAGE};
use futurex_core::{
    Action, Dataset, FilterColumn, FilterConfig, LeaderboardEntry, LeaderboardState, PeriodType,
    SortConfig, SortDirection, SortField, TableView, TimeWindow,
};

fn entry(model: &str, framework: &str, overall: f64) -> LeaderboardEntry {
    LeaderboardEntry {
        model_name: model.to_string(),
        agent_framework: framework.to_string(),
        organization: "Test Org".to_string(),
        overall_score: overall,
        number_of_events: 500,
        test_type: None,
        level1_score: overall * 2.0,
        level2_score: overall,
        level3_score: overall / 2.0,
        level4_score: 0.0,
    }
}

fn window(sy: u16, sm: u8, sw: u8, ey: u16, em: u8, ew: u8) -> TimeWindow {
    TimeWindow {
        start_year: sy,
        start_month: sm,
        start_week: sw,
        end_year: ey,
        end_month: em,
        end_week: ew,
    }
}

/// Weekly `2025-08-W1` holds A:10 and B:20, nothing else is stored.
fn august_dataset() -> Dataset {
    let json = serde_json::json!({
        "overall": [],
        "weekly": { "2025-08-W1": [entry("A", "F1", 10.0), entry("B", "F2", 20.0)] },
        "monthly": {}
    });
    Dataset::from_json(&json.to_string()).unwrap()
}

fn names(view: &TableView) -> Vec<&str> {
    view.rows().iter().map(|r| r.entry.model_name.as_str()).collect()
}

#[test]
fn generated_buckets_strictly_increase() {
    let windows = [
        window(2025, 6, 1, 2026, 2, 2),
        window(2025, 12, 4, 2026, 1, 1),
        window(2024, 1, 2, 2024, 1, 3),
        window(2023, 11, 1, 2025, 3, 4),
    ];

    for w in &windows {
        for p in [PeriodType::Weekly, PeriodType::Monthly] {
            let values: Vec<String> = time_options(w, p).into_iter().map(|o| o.value).collect();
            assert!(!values.is_empty());
            for pair in values.windows(2) {
                assert!(pair[0] < pair[1], "{:?} not before {:?}", pair[0], pair[1]);
            }
        }
    }
}

#[test]
fn weeks_start_at_one_except_in_start_month() {
    let w = window(2025, 6, 3, 2025, 9, 2);
    let months = month_options(&w);
    assert_eq!(months[0].weeks[0].value, "2025-06-W3");
    for month in &months[1..] {
        assert_eq!(month.weeks[0].label, "Week 1");
    }
    assert_eq!(months.last().unwrap().weeks.len(), 2);
}

#[test]
fn weekly_options_agree_with_month_tree() {
    let w = TimeWindow::default();
    let flat: Vec<String> = time_options(&w, PeriodType::Weekly)
        .into_iter()
        .map(|o| o.value)
        .collect();
    let nested: Vec<String> = month_options(&w)
        .into_iter()
        .flat_map(|m| m.weeks.into_iter().map(|o| o.value))
        .collect();
    assert_eq!(flat, nested);
    assert_eq!(flat.first().map(String::as_str), Some("2025-06-W1"));
    assert_eq!(flat.last().map(String::as_str), Some("2026-02-W2"));
    assert!(flat.iter().all(|k| period::month_of(k).is_some()));
}

#[test]
fn filter_never_grows_and_respects_predicate() {
    let entries = vec![
        entry("A", "F1", 1.0),
        entry("B", "F1", 2.0),
        entry("A", "F2", 3.0),
        entry("C", "F3", 4.0),
    ];
    let mut filter = FilterConfig::default();
    filter.toggle(FilterColumn::ModelName, "A");
    filter.toggle(FilterColumn::ModelName, "B");
    filter.toggle(FilterColumn::AgentFramework, "F1");

    let rows = filter_entries(&entries, &filter);
    assert!(rows.len() <= entries.len());
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert!(filter.model_name.contains(&row.model_name));
        assert!(filter.agent_framework.contains(&row.agent_framework));
    }
}

#[test]
fn sort_desc_then_toggled_asc() {
    let entries: Vec<LeaderboardEntry> = [3.0, 9.0, 1.0, 9.0, 4.5]
        .iter()
        .enumerate()
        .map(|(i, s)| entry(&format!("M{i}"), "F", *s))
        .collect();

    let sort = SortConfig::default().click(SortField::Level2Score);
    let desc = apply(&entries, &FilterConfig::default(), sort);
    assert!(desc.windows(2).all(|p| p[0].level2_score >= p[1].level2_score));

    let sort = sort.click(SortField::Level2Score);
    assert_eq!(sort.direction, SortDirection::Asc);
    let asc = apply(&entries, &FilterConfig::default(), sort);
    assert!(asc.windows(2).all(|p| p[0].level2_score <= p[1].level2_score));
}

#[test]
fn accessor_overall_ignores_key_and_unknown_is_none() {
    let dataset = august_dataset();
    assert_eq!(
        dataset.entries(PeriodType::Overall, "2025-08-W1"),
        dataset.entries(PeriodType::Overall, "overall")
    );
    assert!(dataset.entries(PeriodType::Weekly, "2025-08-W2").is_none());
    assert!(dataset.entries(PeriodType::Monthly, "2025-08").is_none());
}

#[test]
fn weekly_scenario_sort_then_filter() {
    let dataset = august_dataset();
    let w = window(2025, 7, 1, 2025, 8, 1);
    let state = LeaderboardState::new(PeriodType::Weekly, &w);
    assert_eq!(state.selected_bucket, "2025-08-W1");
    assert_eq!(state.sort, SortConfig::default());
    assert_eq!(state.view(&dataset).rows().len(), 2);

    let state = state.reduce(&Action::SortBy(SortField::OverallScore), &w);
    assert_eq!(state.sort, SortConfig::by(SortField::OverallScore, SortDirection::Desc));
    let view = state.view(&dataset);
    assert_eq!(names(&view), vec!["B", "A"]);
    assert_eq!(view.rows()[0].rank, 1);

    let state = state.reduce(
        &Action::ToggleFilterValue {
            column: FilterColumn::ModelName,
            value: "A".into(),
        },
        &w,
    );
    let view = state.view(&dataset);
    assert_eq!(names(&view), vec!["A"]);
    assert_eq!(view.rows()[0].rank, 1);
}

#[test]
fn fresh_state_lists_buckets_ranked_without_active_sort() {
    let dataset = august_dataset();
    let w = window(2025, 7, 1, 2025, 8, 1);
    let state = LeaderboardState::new(PeriodType::Weekly, &w);
    assert_eq!(state.sort.field, None);
    assert_eq!(state.sort.indicator(SortField::OverallScore), futurex_core::SortIndicator::Inactive);
    assert_eq!(names(&state.view(&dataset)), vec!["B", "A"]);
}

#[test]
fn switching_to_monthly_without_data_shows_no_data() {
    let dataset = august_dataset();
    let w = window(2025, 7, 1, 2025, 8, 1);
    let state = LeaderboardState::new(PeriodType::Weekly, &w)
        .reduce(&Action::SelectPeriod(PeriodType::Monthly), &w);
    assert_eq!(state.selected_bucket, "2025-08");

    match state.view(&dataset) {
        TableView::NoData(empty) => {
            assert_eq!(empty.title, "No Data Available");
            assert!(empty.message.starts_with("Monthly data is not available yet."));
        }
        other => panic!("expected no-data state, got {other:?}"),
    }
}

#[test]
fn missing_weekly_bucket_lists_available_weeks() {
    let dataset = august_dataset();
    let w = window(2025, 7, 1, 2025, 8, 1);
    let state = LeaderboardState::new(PeriodType::Weekly, &w)
        .reduce(&Action::SelectWeek("2025-07-W2".into()), &w);

    match state.view(&dataset) {
        TableView::NoData(empty) => {
            assert_eq!(empty.hint, "Weekly data is available for: August Week 1");
        }
        other => panic!("expected no-data state, got {other:?}"),
    }
}

#[test]
fn filters_excluding_everything_show_no_matches() {
    let dataset = august_dataset();
    let w = window(2025, 7, 1, 2025, 8, 1);
    let state = LeaderboardState::new(PeriodType::Weekly, &w).reduce(
        &Action::ToggleFilterValue {
            column: FilterColumn::AgentFramework,
            value: "Nonexistent".into(),
        },
        &w,
    );
    assert_eq!(state.view(&dataset), TableView::NoMatches);
    assert!(state.filter.is_active(FilterColumn::AgentFramework));
    assert_eq!(NO_MATCHES_MESSAGE, "No data matches the filter criteria");
}

#[test]
fn bundled_default_selection_has_rows() {
    let site = futurex_core::Site::bundled().unwrap();
    let state = LeaderboardState::new(site.config.default_period, &site.config.window);
    let view = state.view(&site.dataset);
    assert!(!view.rows().is_empty());
    assert!(view.rows()[0].medal.is_some());
}
