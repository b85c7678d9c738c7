use futurex_core::period::{self, MonthOption, TimeOption};
use futurex_core::{Action, LeaderboardState, PeriodType, Region, TimeWindow};
use leptos::prelude::*;

use crate::browser::region_dom_id;

#[component]
pub fn TimeSelector(
    state: RwSignal<LeaderboardState>,
    window: TimeWindow,
    dispatch: Callback<Action>,
) -> impl IntoView {
    let months = StoredValue::new(period::month_options(&window));
    let monthly = StoredValue::new(period::time_options(&window, PeriodType::Monthly));
    let period = move || state.with(|s| s.period);

    view! {
        <div class="time-selector-container">
            <div class="period-selector">
                {PeriodType::all().iter().map(|p| {
                    let p = *p;
                    view! {
                        <button
                            class=move || if period() == p { "period-btn active" } else { "period-btn" }
                            on:click=move |_| dispatch.run(Action::SelectPeriod(p))
                        >
                            {p.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            {move || (period() != PeriodType::Overall).then(|| view! {
                <div id=region_dom_id(Region::TimeDropdown) class="time-dropdown">
                    <button
                        class="time-dropdown-toggle"
                        on:click=move |_| dispatch.run(Action::ToggleTimeDropdown)
                    >
                        <span>{move || state.with(|s| s.selected_label(&window))}</span>
                        <span class="chevron">"▾"</span>
                    </button>
                    {move || state.with(|s| s.time_dropdown_open).then(|| match period() {
                        PeriodType::Weekly => view! {
                            <WeekMenu state=state months=months.get_value() dispatch=dispatch />
                        }.into_any(),
                        _ => view! {
                            <MonthMenu state=state options=monthly.get_value() dispatch=dispatch />
                        }.into_any(),
                    })}
                </div>
            })}
        </div>
    }
}

/// Two-level month → week picker.
#[component]
fn WeekMenu(
    state: RwSignal<LeaderboardState>,
    months: Vec<MonthOption>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    view! {
        <ul class="time-menu">
            {months.into_iter().map(|m| {
                let month_key = m.value.clone();
                let expanded = {
                    let key = month_key.clone();
                    move || state.with(|s| s.is_month_expanded(&key))
                };
                let arrow_open = expanded.clone();
                let weeks = m.weeks;
                view! {
                    <li class="month-group">
                        <button
                            class="month-toggle"
                            on:click=move |_| dispatch.run(Action::ToggleMonth(month_key.clone()))
                        >
                            <span class=move || if arrow_open() { "arrow open" } else { "arrow" }>"▸"</span>
                            {m.label}
                        </button>
                        <Show when=expanded>
                            <ul class="week-options">
                                {weeks.iter().cloned().map(|w| view! {
                                    <OptionItem state=state option=w dispatch=dispatch weekly=true />
                                }).collect::<Vec<_>>()}
                            </ul>
                        </Show>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn MonthMenu(
    state: RwSignal<LeaderboardState>,
    options: Vec<TimeOption>,
    dispatch: Callback<Action>,
) -> impl IntoView {
    view! {
        <ul class="time-menu">
            {options.into_iter().map(|o| view! {
                <OptionItem state=state option=o dispatch=dispatch weekly=false />
            }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn OptionItem(
    state: RwSignal<LeaderboardState>,
    option: TimeOption,
    dispatch: Callback<Action>,
    weekly: bool,
) -> impl IntoView {
    let value = option.value;
    let selected = {
        let value = value.clone();
        move || state.with(|s| s.selected_bucket == value)
    };
    let on_click = move |_| {
        let action = if weekly {
            Action::SelectWeek(value.clone())
        } else {
            Action::SelectMonth(value.clone())
        };
        dispatch.run(action);
    };

    view! {
        <li
            class=move || if selected() { "time-option selected" } else { "time-option" }
            on:click=on_click
        >
            {option.label}
        </li>
    }
}
