//! Appointment Panel
//!
//! Scheduled appointments with an in-memory time-window filter. The list
//! is fetched once per load; filter changes only re-slice it.

use leptos::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Loading};
use crate::state::filter::{filter_appointments, PeriodFilter};
use crate::state::global::{Appointment, GlobalState};
use crate::utils::{format_optional_date, format_period};

/// Fetch the full appointment set into shared state.
pub async fn load_appointments(api: ApiClient, state: GlobalState) {
    match api.appointments().await {
        Ok(appointments) => state.appointments.set(appointments),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load appointments: {}", e).into());
            state.show_error("Failed to load appointments");
        }
    }
}

/// Appointment panel component
#[component]
pub fn AppointmentPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (refreshing, set_refreshing) = create_signal(false);

    let refresh = {
        let api = api.clone();
        let state = state.clone();
        move |_| {
            let api = api.clone();
            let state = state.clone();
            set_refreshing.set(true);
            spawn_local(async move {
                load_appointments(api, state).await;
                set_refreshing.set(false);
            });
        }
    };

    let appointments = state.appointments;
    let period_filter = state.period_filter;

    let filtered = create_memo(move |_| {
        let today = chrono::Local::now().date_naive();
        filter_appointments(&appointments.get(), period_filter.get(), today)
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Scheduled appointments"</h2>

                <div class="flex items-center space-x-2">
                    <select
                        on:change=move |ev| {
                            period_filter.set(PeriodFilter::parse(&event_target_value(&ev)))
                        }
                        prop:value=move || period_filter.get().as_str()
                        class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="all">"All"</option>
                        <option value="today">"Today"</option>
                        <option value="week">"Last 7 days"</option>
                        <option value="month">"Last month"</option>
                    </select>
                    <button
                        on:click=refresh
                        class="px-3 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg text-sm
                               font-medium transition-colors"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || {
                if refreshing.get() {
                    view! { <Loading label="Loading appointments..." /> }.into_view()
                } else {
                    let filtered = filtered.get();
                    if filtered.is_empty() {
                        view! { <EmptyState icon="📭" message="No appointments found" /> }
                            .into_view()
                    } else {
                        filtered
                            .into_iter()
                            .map(|apt| view! { <AppointmentItem appointment=apt /> })
                            .collect_view()
                    }
                }
            }}
        </section>
    }
}

/// Single appointment row
#[component]
fn AppointmentItem(appointment: Appointment) -> impl IntoView {
    view! {
        <div class="flex items-start justify-between py-3 border-b border-gray-700 last:border-0">
            <div>
                <div class="font-semibold">
                    {format_optional_date(appointment.date.as_deref())}
                </div>
                <div class="text-sm text-gray-300">{format_period(&appointment.period)}</div>
                <div class="text-sm mt-1">
                    <strong>{appointment.name.clone()}</strong>
                    <span class="text-gray-400">" · "{appointment.user_id.clone()}</span>
                </div>
                <div class="text-xs text-gray-500 mt-1">
                    "Created: "{format_optional_date(appointment.created_at.as_deref())}
                </div>
            </div>

            <span class="text-xs px-2 py-1 bg-green-600/20 text-green-400 rounded-full">
                "Confirmed"
            </span>
        </div>
    }
}
