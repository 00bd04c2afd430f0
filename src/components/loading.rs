//! Loading Component
//!
//! Loading, empty and error states shared by the panels.

use leptos::*;

/// Inline loading block shown while a panel fetches.
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-3 py-12 text-gray-400">
            <div class="loading-spinner w-6 h-6" />
            <span>{label}</span>
        </div>
    }
}

/// Empty-state placeholder with an icon and message.
#[component]
pub fn EmptyState(icon: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center text-gray-400">
            <span class="text-4xl mb-3">{icon}</span>
            <p>{message}</p>
        </div>
    }
}

/// Error-state placeholder kept in place of content that failed to load.
#[component]
pub fn ErrorState(message: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center text-red-400">
            <span class="text-4xl mb-3">"⚠"</span>
            <p>{message}</p>
        </div>
    }
}
