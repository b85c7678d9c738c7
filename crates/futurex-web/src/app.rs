use std::sync::Arc;

use futurex_core::{Analytics, AnalyticsEvent, Site, SiteTab};
use leptos::prelude::*;

use crate::browser::{log_error, page_url, ConsoleAnalytics};
use crate::components::header::Header;
use crate::components::nav::NavTabs;
use crate::components::notice::NoticeModal;
use crate::pages::{finance::FinancePage, leaderboard::LeaderboardPage, overview::OverviewPage};

#[component]
pub fn App() -> impl IntoView {
    let site = Site::bundled().unwrap_or_else(|e| {
        log_error(&format!("failed to load bundled site data: {e}"));
        Site::default()
    });

    let analytics: Arc<dyn Analytics> = Arc::new(ConsoleAnalytics {
        enabled: site.config.analytics.enabled,
    });
    analytics.track(&AnalyticsEvent::custom("enter_page"));
    analytics.track(&AnalyticsEvent::page_view(page_url()));

    let (tab, set_tab) = signal(SiteTab::default());
    let on_select = {
        let analytics = analytics.clone();
        Callback::new(move |t: SiteTab| {
            set_tab.set(t);
            analytics.track(&t.click_event());
        })
    };

    let notice = site.config.notice.clone();

    view! {
        <div class="app">
            <div class="banner">
                <Header />
                <NavTabs active=tab on_select=on_select />
            </div>
            <main class="content">
                {move || match tab.get() {
                    SiteTab::Overview => view! { <OverviewPage /> }.into_any(),
                    SiteTab::Leaderboard => view! {
                        <LeaderboardPage site=site.clone() analytics=analytics.clone() />
                    }.into_any(),
                    SiteTab::Sp500 => view! { <FinancePage /> }.into_any(),
                }}
            </main>
            <NoticeModal config=notice />
        </div>
    }
}
