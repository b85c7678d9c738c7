use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="wordmark">"FutureX"</h1>
            <span class="subtitle">"Can AI predict the future? The next frontier for LLM Agents!"</span>
        </header>
    }
}
