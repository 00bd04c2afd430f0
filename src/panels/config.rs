//! Configuration Panel
//!
//! Masked server configuration with a local-only save path, plus the API
//! connection settings. The server never receives anything from these
//! forms; saving writes to browser storage only.

use leptos::*;

use crate::api::ApiClient;
use crate::state::global::GlobalState;
use crate::storage::{self, LocalConfig};

/// Configuration panel component
#[component]
pub fn ConfigPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (sid, set_sid) = create_signal(String::new());
    let (number, set_number) = create_signal(String::new());
    let (token, set_token) = create_signal(String::new());
    let (token_placeholder, set_token_placeholder) = create_signal("Auth token".to_string());

    // Load the masked server configuration once. Local storage is the
    // fallback when the server cannot be reached; this is the only panel
    // with a fallback path.
    {
        let api = api.clone();
        let state = state.clone();
        create_effect(move |_| {
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                match api.config().await {
                    Ok(config) => {
                        set_sid.set(config.twilio_sid);
                        set_number.set(config.whatsapp_number);
                        set_token_placeholder.set(if config.has_token {
                            "Token configured (hidden)".to_string()
                        } else {
                            "Token not set".to_string()
                        });
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load configuration: {}", e).into(),
                        );
                        let local = storage::load_local_config();
                        set_sid.set(local.twilio_sid);
                        set_number.set(local.whatsapp_number);
                        state.show_warning("Loaded locally saved configuration (offline)");
                    }
                }
            });
        });
    }

    let save = {
        let state = state.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            storage::save_local_config(&LocalConfig {
                twilio_sid: sid.get(),
                whatsapp_number: number.get(),
            });
            state.show_warning("Saved locally. Update the server's .env and restart to apply.");

            // the token is never transmitted or stored; clear it so no
            // secret stays visible in the form
            set_token.set(String::new());
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Configuration"</h2>

            <form on:submit=save class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Twilio Account SID"</label>
                    <input
                        type="text"
                        prop:value=move || sid.get()
                        on:input=move |ev| set_sid.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Auth token"</label>
                    <input
                        type="password"
                        placeholder=move || token_placeholder.get()
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <p class="text-xs text-gray-500 mt-1">
                        "The token stays on the server; it is never shown or saved here."
                    </p>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"WhatsApp number"</label>
                    <input
                        type="text"
                        prop:value=move || number.get()
                        on:input=move |ev| set_number.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Save locally"
                </button>
            </form>

            <ConnectionSettings />
        </section>
    }
}

/// API connection settings; the saved URL takes effect on the next load.
#[component]
fn ConnectionSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(storage::api_base());
    let (testing, set_testing) = create_signal(false);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);

        let url = api_url.get();
        let state = state_for_test.clone();
        spawn_local(async move {
            match ApiClient::new(url).health().await {
                Ok(()) => state.show_success("Connection successful"),
                Err(e) => {
                    web_sys::console::error_1(&format!("Connection test failed: {}", e).into());
                    state.show_error("Connection failed");
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        storage::set_api_base(&api_url.get());
        state_for_save.show_success("API URL saved; reload to apply");
    };

    view! {
        <div class="mt-6 pt-6 border-t border-gray-700">
            <label class="block text-sm text-gray-400 mb-2">"Server API URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=test_connection
                    disabled=move || testing.get()
                    class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if testing.get() { "Testing..." } else { "Test" }}
                </button>
                <button
                    on:click=save_url
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}
