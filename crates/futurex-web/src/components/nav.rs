use futurex_core::SiteTab;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

/// Section tabs. ArrowLeft and ArrowRight move between tabs with wrap-around.
#[component]
pub fn NavTabs(active: ReadSignal<SiteTab>, on_select: Callback<SiteTab>) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if let Some(tab) = active.get_untracked().on_key(&ev.key()) {
            ev.prevent_default();
            on_select.run(tab);
        }
    };

    view! {
        <nav class="nav-tabs" role="tablist" aria-label="Page section" on:keydown=on_keydown>
            {SiteTab::all().iter().map(|t| {
                let t = *t;
                let is_active = move || active.get() == t;
                view! {
                    <button
                        role="tab"
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        aria-selected=move || is_active().to_string()
                        tabindex=move || if is_active() { "0" } else { "-1" }
                        on:click=move |_| on_select.run(t)
                    >
                        {t.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}
