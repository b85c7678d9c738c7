use futurex_core::questions::OPEN_ENDED_LABEL;
use futurex_core::{Level, QuestionBank, QuestionEntry};
use leptos::prelude::*;

#[component]
pub fn QuestionTable(bank: QuestionBank) -> impl IntoView {
    let (level, set_level) = signal(Level::default());
    let bank = StoredValue::new(bank);
    let questions = move || bank.with_value(|b| {
        b.for_level(level.get()).into_iter().cloned().collect::<Vec<_>>()
    });

    view! {
        <section class="question-table">
            <h2 class="section-title">"Partial Questions 📋"</h2>

            <div class="level-selector">
                {Level::all().iter().map(|l| {
                    let l = *l;
                    view! {
                        <button
                            class=move || if level.get() == l { "level-btn active" } else { "level-btn" }
                            on:click=move |_| set_level.set(l)
                        >
                            {l.label()}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <div class="question-grid">
                <div class="question-header">
                    <div class="cell level">"LEVEL"</div>
                    <div class="cell question">"QUESTION"</div>
                    <div class="cell options">"OPTIONS"</div>
                </div>
                {move || {
                    let rows = questions();
                    if rows.is_empty() {
                        view! {
                            <div class="empty-state">{level.get().empty_message()}</div>
                        }.into_any()
                    } else {
                        rows.into_iter().map(|q| view! { <QuestionRow question=q /> }).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn QuestionRow(question: QuestionEntry) -> impl IntoView {
    let level_class = format!("level-tag level-{}", question.level_number());
    let options = (!question.is_open_ended()).then(|| question.options.clone());

    view! {
        <div class="question-row">
            <div class="cell level"><span class=level_class>{question.level.clone()}</span></div>
            <div class="cell question">{question.question.clone()}</div>
            <div class="cell options">
                {match options {
                    Some(options) => view! {
                        <div class="option-tags">
                            {options.into_iter().map(|o| view! { <span class="option-tag">{o}</span> }).collect::<Vec<_>>()}
                        </div>
                    }.into_any(),
                    None => view! { <span class="no-options">{OPEN_ENDED_LABEL}</span> }.into_any(),
                }}
            </div>
        </div>
    }
}
