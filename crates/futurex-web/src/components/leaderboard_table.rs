use futurex_core::table::{self, NO_MATCHES_MESSAGE};
use futurex_core::{
    Action, EmptyState, FacetOption, FilterColumn, LeaderboardState, RankedRow, Region, SortField,
    TableView,
};
use leptos::prelude::*;

use crate::browser::region_dom_id;

#[component]
pub fn LeaderboardTable(
    state: RwSignal<LeaderboardState>,
    table_view: Memo<TableView>,
    model_facets: Memo<Vec<FacetOption>>,
    framework_facets: Memo<Vec<FacetOption>>,
    undisclosed: Vec<String>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let undisclosed = StoredValue::new(undisclosed);

    view! {
        <div id="leaderboard-table" class="leaderboard-table">
            <div class="table-header">
                <div class="cell rank">"Rank"</div>
                <FilterHeader column=FilterColumn::ModelName state=state facets=model_facets undisclosed=undisclosed dispatch=dispatch />
                <FilterHeader column=FilterColumn::AgentFramework state=state facets=framework_facets undisclosed=undisclosed dispatch=dispatch />
                <div class="cell organization">"Organization"</div>
                <SortHeader field=SortField::OverallScore state=state dispatch=dispatch />
                <div class="cell events">"Events"</div>
                {SortField::all()[1..].iter().map(|f| view! {
                    <SortHeader field=*f state=state dispatch=dispatch />
                }).collect::<Vec<_>>()}
            </div>

            {move || match table_view.get() {
                TableView::NoData(empty) => view! { <NoDataState empty=empty /> }.into_any(),
                TableView::NoMatches => view! {
                    <div class="empty-state no-matches">{NO_MATCHES_MESSAGE}</div>
                }.into_any(),
                TableView::Rows(rows) => rows.into_iter().map(|row| view! {
                    <Row row=row undisclosed=undisclosed.get_value() />
                }).collect::<Vec<_>>().into_any(),
            }}
        </div>
    }
}

#[component]
fn Row(row: RankedRow, undisclosed: Vec<String>) -> impl IntoView {
    let entry = row.entry;
    let medal = row.medal;

    view! {
        <div class=if medal.is_some() { "table-row podium" } else { "table-row" }>
            <div class="cell rank">
                <span class=medal.map(|m| m.css_class()).unwrap_or("rank-number")>
                    {medal.map(|m| m.emoji().to_string()).unwrap_or_else(|| row.rank.to_string())}
                </span>
            </div>
            <div class="cell model" title=entry.display_name()>
                {entry.display_model_name(&undisclosed)}
            </div>
            <div class="cell framework">{entry.agent_framework.clone()}</div>
            <div class="cell organization">{entry.organization.clone()}</div>
            <div class="cell score overall">
                <span class="score-badge">{table::format_overall(entry.overall_score)}</span>
            </div>
            <div class="cell events">{table::format_count(entry.number_of_events)}</div>
            <div class="cell score">{table::format_level(entry.level1_score)}</div>
            <div class="cell score">{table::format_level(entry.level2_score)}</div>
            <div class="cell score">{table::format_level(entry.level3_score)}</div>
            <div class="cell score">{table::format_level(entry.level4_score)}</div>
        </div>
    }
}

#[component]
fn SortHeader(
    field: SortField,
    state: RwSignal<LeaderboardState>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let indicator = move || state.with(|s| s.sort.indicator(field));

    view! {
        <div
            class=move || if state.with(|s| s.sort.field == Some(field)) { "cell sortable active" } else { "cell sortable" }
            on:click=move |_| dispatch.run(Action::SortBy(field))
        >
            {field.label()}
            <span class="sort-icon">{move || indicator().glyph()}</span>
        </div>
    }
}

/// Column header with a checkbox popover listing the column's values.
#[component]
fn FilterHeader(
    column: FilterColumn,
    state: RwSignal<LeaderboardState>,
    facets: Memo<Vec<FacetOption>>,
    undisclosed: StoredValue<Vec<String>>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let is_open = move || state.with(|s| s.open_filter == Some(column));
    let summary = move || {
        state.with(|s| undisclosed.with_value(|hidden| s.filter.summary(column, hidden)))
    };

    view! {
        <div id=region_dom_id(Region::Filter(column)) class="cell filterable">
            <button
                class=move || {
                    if state.with(|s| s.filter.is_active(column)) { "filter-toggle active" } else { "filter-toggle" }
                }
                on:click=move |_| dispatch.run(Action::ToggleFilterDropdown(column))
            >
                {column.label()}
                <span class="filter-summary">{summary}</span>
            </button>
            {move || is_open().then(|| view! {
                <div class="filter-dropdown">
                    <div class="filter-actions">
                        <button on:click=move |_| dispatch.run(Action::SetFilter {
                            column,
                            values: facets.with_untracked(|options| {
                                options.iter().map(|o| o.value.clone()).collect()
                            }),
                        })>"All"</button>
                        <button on:click=move |_| dispatch.run(Action::ClearFilter(column))>"Clear"</button>
                    </div>
                    <ul class="filter-options">
                        {move || facets.get().into_iter().map(|FacetOption { value, label }| {
                            let checked = {
                                let value = value.clone();
                                move || state.with(|s| s.filter.values(column).contains(&value))
                            };
                            let toggle = value;
                            view! {
                                <li>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| dispatch.run(Action::ToggleFilterValue {
                                                column,
                                                value: toggle.clone(),
                                            })
                                        />
                                        {label}
                                    </label>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
        </div>
    }
}

#[component]
fn NoDataState(empty: EmptyState) -> impl IntoView {
    view! {
        <div class="empty-state no-data">
            <h3>{empty.title}</h3>
            <p>{empty.message}</p>
            <div class="empty-hint">"💡 " {empty.hint}</div>
        </div>
    }
}
