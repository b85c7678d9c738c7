use std::sync::Arc;

use futurex_core::table::facet_options;
use futurex_core::{
    Action, Analytics, FilterColumn, LeaderboardController, Region, Site,
};
use leptos::prelude::*;

use crate::browser::DomOutsidePointer;
use crate::components::contact::ContactSection;
use crate::components::leaderboard_table::LeaderboardTable;
use crate::components::question_table::QuestionTable;
use crate::components::time_selector::TimeSelector;

#[component]
pub fn LeaderboardPage(site: Site, analytics: Arc<dyn Analytics>) -> impl IntoView {
    let Site {
        config,
        dataset,
        questions,
    } = site;
    let window = config.window;

    // Outside presses are forwarded through a signal so the listener has
    // returned before the controller unsubscribes it.
    let outside = RwSignal::new(None::<Region>);
    let controller = StoredValue::new_local(LeaderboardController::new(
        config.default_period,
        window,
        DomOutsidePointer::new(outside),
        analytics,
    ));
    let state = RwSignal::new(controller.with_value(|c| c.state().clone()));

    let dispatch = Callback::new(move |action: Action| {
        controller.update_value(|c| state.set(c.dispatch(action).clone()));
    });

    Effect::new(move || {
        if let Some(region) = outside.get() {
            dispatch.run(Action::PointerOutside(region));
        }
    });

    let dataset = StoredValue::new(dataset);
    let undisclosed = StoredValue::new(config.undisclosed_models.clone());
    let table_view = Memo::new(move |_| state.with(|s| dataset.with_value(|d| s.view(d))));
    let facets = move |column: FilterColumn| {
        Memo::new(move |_| {
            state.with(|s| {
                dataset.with_value(|d| {
                    undisclosed.with_value(|hidden| {
                        d.entries(s.period, &s.selected_bucket)
                            .map(|entries| facet_options(entries, column, hidden))
                            .unwrap_or_default()
                    })
                })
            })
        })
    };

    view! {
        <div class="page leaderboard-page">
            <div class="controls">
                <h2 class="section-title">"Leaderboard 🏆"</h2>
                <TimeSelector state=state window=window dispatch=dispatch />
            </div>

            <LeaderboardTable
                state=state
                table_view=table_view
                model_facets=facets(FilterColumn::ModelName)
                framework_facets=facets(FilterColumn::AgentFramework)
                undisclosed=config.undisclosed_models
                dispatch=dispatch
            />

            <ul class="next-update">
                <li><strong>"GPT-5 and GPT Deep Research results"</strong>" will be included in the next update, stay tuned!"</li>
                <li><strong>"New web-search & deep research agents"</strong>" are coming soon!"</li>
            </ul>

            <QuestionTable bank=questions />
            <ContactSection />
        </div>
    }
}
