//! App Root Component
//!
//! Composes the dashboard panels over one shared API client and drives
//! the startup sequence.

use futures_util::future::try_join;
use leptos::*;

use crate::api::ApiClient;
use crate::components::{Nav, Toast};
use crate::panels::{AppointmentPanel, ConfigPanel, ConversationPanel, StatisticsPanel};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the API client to all panels
    provide_global_state();
    provide_context(ApiClient::from_storage());

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let api = use_context::<ApiClient>().expect("ApiClient not found");

    // Startup: health check, then the initial loads in parallel. The join
    // is all-or-nothing; on failure nothing is written and the panels
    // keep their empty state.
    {
        let api = api.clone();
        let state = state.clone();
        create_effect(move |_| {
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                state.loading.set(true);

                if let Err(e) = api.health().await {
                    web_sys::console::error_1(&format!("Health check failed: {}", e).into());
                    state.api_online.set(false);
                    state.show_error("Could not reach the server");
                    state.loading.set(false);
                    return;
                }
                state.api_online.set(true);

                match try_join(api.statistics(), api.appointments()).await {
                    Ok((stats, appointments)) => {
                        state.stats.set(stats);
                        state.appointments.set(appointments);
                        state
                            .last_updated
                            .set(Some(chrono::Utc::now().timestamp_millis()));
                        state.show_success("Dashboard loaded");
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Initial load failed: {}", e).into());
                        state.show_error("Failed to load dashboard data");
                    }
                }

                state.loading.set(false);
            });
        });
    }

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-8">
                <StatisticsPanel />

                <div class="grid lg:grid-cols-2 gap-8 items-start">
                    <ConversationPanel />

                    <div class="space-y-8">
                        <AppointmentPanel />
                        <ConfigPanel />
                    </div>
                </div>
            </main>

            <Footer />

            <Toast />
        </div>
    }
}

/// Footer with server status and last refresh time
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Server status
                <div class="flex items-center space-x-2">
                    {move || {
                        if state.api_online.get() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                    <span>"Online"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Offline"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Last refresh time
                <div class="text-gray-400">
                    {move || {
                        state.last_updated.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Last refresh: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not refreshed yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
