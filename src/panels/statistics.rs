//! Statistics Panel
//!
//! Aggregate booking counters with a periodic self-refresh.

use leptos::*;

use crate::api::ApiClient;
use crate::components::StatCard;
use crate::state::global::GlobalState;

/// Refresh cadence for the counters.
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Load the statistics snapshot into shared state.
///
/// Overlapping in-flight refreshes are not coalesced or cancelled; the
/// last response to resolve wins.
pub async fn load_statistics(api: ApiClient, state: GlobalState) {
    match api.statistics().await {
        Ok(stats) => {
            state.stats.set(stats);
            state
                .last_updated
                .set(Some(chrono::Utc::now().timestamp_millis()));
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load statistics: {}", e).into());
            state.show_error("Failed to load statistics");
        }
    }
}

/// Statistics panel component
#[component]
pub fn StatisticsPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Periodic refresh for the lifetime of the panel. Dropping the handle
    // cancels the timer, so teardown stops the refresh.
    let refresh = {
        let api = api.clone();
        let state = state.clone();
        gloo_timers::callback::Interval::new(REFRESH_INTERVAL_MS, move || {
            let api = api.clone();
            let state = state.clone();
            spawn_local(load_statistics(api, state));
        })
    };
    on_cleanup(move || drop(refresh));

    let stats = state.stats;

    view! {
        <section>
            <h2 class="text-lg font-semibold mb-4">"Overview"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard
                    label="Total bookings"
                    icon="📅"
                    value=Signal::derive(move || stats.get().total_bookings)
                />
                <StatCard
                    label="Unique users"
                    icon="👥"
                    value=Signal::derive(move || stats.get().unique_users)
                />
                <StatCard
                    label="Bookings today"
                    icon="🕑"
                    value=Signal::derive(move || stats.get().today_count())
                />
            </div>
        </section>
    }
}
