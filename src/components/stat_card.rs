//! Stat Card Component
//!
//! Displays a single aggregate counter.

use leptos::*;

/// Counter card for the statistics panel.
#[component]
pub fn StatCard(
    /// Label shown above the counter
    label: &'static str,
    icon: &'static str,
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-lg">{icon}</span>
            </div>

            <div class="text-3xl font-bold mt-2">
                {move || value.get().to_string()}
            </div>
        </div>
    }
}
