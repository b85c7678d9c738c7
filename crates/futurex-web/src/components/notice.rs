use futurex_core::{NoticeConfig, Notice};
use leptos::prelude::*;

use crate::browser::LocalStorageFlags;

/// Spring Festival schedule notice, shown until the visitor dismisses it.
#[component]
pub fn NoticeModal(config: NoticeConfig) -> impl IntoView {
    let notice = StoredValue::new(Notice::new(config, LocalStorageFlags));
    let (open, set_open) = signal(notice.with_value(|n| n.should_show()));

    let close = move |_| {
        notice.with_value(|n| n.dismiss());
        set_open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"🎊 FutureX Spring Festival Update Notice"</h2>
                    <div class="modal-body">
                        <p>
                            "Thank you for your continuous attention to FutureX! As the 2026 Chinese Spring Festival holiday approaches, we announce the temporary update suspension and key schedule arrangements as follows:"
                        </p>
                        <div class="notice-highlight">
                            "📅 Suspension Period: " <span class="notice-dates">"Feb 11 – Feb 25, 2026"</span> " (2 weeks)"
                        </div>
                        <ul class="notice-schedule">
                            <li><strong>"📊 Latest Leaderboard: "</strong>"To be updated around Feb 13, 2026 as scheduled"</li>
                            <li><strong>"🔄 Resume & New Questions: "</strong>"New prediction questions will be released on Feb 26, 2026, with all regular updates resuming the same day."</li>
                        </ul>
                        <p class="notice-apology">"We apologize for any inconvenience caused and appreciate your understanding."</p>
                        <p class="notice-greeting">"🎉 Wishing you a joyful Spring Festival! 🧧"</p>
                        <p class="notice-signature">"The FutureX Team"</p>
                    </div>
                    <div class="modal-footer">
                        <button class="modal-close" on:click=close>"Got it"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
