use futurex_core::fixtures::FINANCE_MD;
use leptos::prelude::*;

use crate::components::markdown::MarkdownArticle;

#[component]
pub fn FinancePage() -> impl IntoView {
    view! {
        <div class="page finance-page">
            <MarkdownArticle source=FINANCE_MD />
        </div>
    }
}
