use futurex_core::fixtures::OVERVIEW_MD;
use leptos::prelude::*;

use crate::components::markdown::MarkdownArticle;

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="page overview-page">
            <MarkdownArticle source=OVERVIEW_MD />
        </div>
    }
}
