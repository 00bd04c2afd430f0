//! Conversation Panel
//!
//! Search a user's conversation history, inspect the full transcript in a
//! modal and restart the conversation server-side.

use futures_util::future::try_join;
use leptos::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, ErrorState, Loading};
use crate::state::global::{ConversationMessage, GlobalState, Sender};
use crate::utils::{debounce, format_optional_date, normalized_query};

/// Debounce window for live search on the user id input.
const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Everything the detail modal renders. Only built when both the history
/// and the status fetch succeed; messages stay in API order.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationDetail {
    pub user_id: String,
    pub messages: Vec<ConversationMessage>,
    pub state_label: String,
}

impl ConversationDetail {
    pub fn new(user_id: String, messages: Vec<ConversationMessage>, state_label: String) -> Self {
        Self {
            user_id,
            messages,
            state_label,
        }
    }
}

/// The restart action only targets a conversation opened in the detail
/// modal this session.
fn restart_target(current: Option<String>) -> Option<String> {
    current.filter(|id| !id.is_empty())
}

/// Conversation panel component
#[component]
pub fn ConversationPanel() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (query, set_query) = create_signal(String::new());
    // None until the first search completes
    let (results, set_results) = create_signal(None::<Vec<ConversationMessage>>);
    let (searched_user, set_searched_user) = create_signal(String::new());
    let (searching, set_searching) = create_signal(false);
    let (load_failed, set_load_failed) = create_signal(false);
    let (detail, set_detail) = create_signal(None::<ConversationDetail>);

    // Fetch the history for an already-validated user id. A new search
    // never cancels an in-flight one; the last response to resolve wins.
    let run_search = {
        let api = api.clone();
        let state = state.clone();
        Callback::new(move |user_id: String| {
            let api = api.clone();
            let state = state.clone();
            set_searching.set(true);
            set_searched_user.set(user_id.clone());
            spawn_local(async move {
                match api.conversation_history(&user_id).await {
                    Ok(history) => {
                        set_load_failed.set(false);
                        set_results.set(Some(history));
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load history: {}", e).into(),
                        );
                        set_load_failed.set(true);
                        state.show_error("Failed to load conversation history");
                    }
                }
                set_searching.set(false);
            });
        })
    };

    // Explicit search path; warns on empty input before any network call.
    let do_search = {
        let state = state.clone();
        move || match normalized_query(&query.get()) {
            Some(user_id) => run_search.call(user_id),
            None => state.show_warning("Enter a user id to search"),
        }
    };
    let search_click = {
        let do_search = do_search.clone();
        move |_| do_search()
    };
    let search_keypress = {
        let do_search = do_search.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                do_search();
            }
        }
    };

    // Live search as the user types; empty input is ignored silently.
    let mut live_search = debounce(SEARCH_DEBOUNCE_MS, move |value: String| {
        if let Some(user_id) = normalized_query(&value) {
            run_search.call(user_id);
        }
    });
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        live_search(value);
    };

    // History and status are fetched in parallel; the modal only opens,
    // and the current user is only recorded, when both succeed.
    let open_details = {
        let api = api.clone();
        let state = state.clone();
        Callback::new(move |user_id: String| {
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                let joined = try_join(
                    api.conversation_history(&user_id),
                    api.conversation_status(&user_id),
                )
                .await;

                match joined {
                    Ok((messages, status)) => {
                        state.current_user_id.set(Some(user_id.clone()));
                        set_detail.set(Some(ConversationDetail::new(
                            user_id,
                            messages,
                            status.state,
                        )));
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load conversation details: {}", e).into(),
                        );
                        state.show_error("Failed to load conversation details");
                    }
                }
            });
        })
    };

    let restart = {
        let api = api.clone();
        let state = state.clone();
        move |_: web_sys::MouseEvent| {
            let Some(user_id) = restart_target(state.current_user_id.get()) else {
                return;
            };
            let api = api.clone();
            let state = state.clone();
            spawn_local(async move {
                match api.restart_conversation(&user_id).await {
                    Ok(()) => {
                        state.show_success("Conversation restarted");
                        set_detail.set(None);
                        // re-run the last search so the list reflects the
                        // server-side reset
                        if let Some(last) = normalized_query(&searched_user.get_untracked()) {
                            run_search.call(last);
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to restart conversation: {}", e).into(),
                        );
                        state.show_error("Failed to restart conversation");
                    }
                }
            });
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Conversations"</h2>

            <div class="flex space-x-2 mb-4">
                <input
                    type="text"
                    placeholder="User id (WhatsApp number)"
                    prop:value=move || query.get()
                    on:input=on_input
                    on:keypress=search_keypress
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=search_click
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                           rounded-lg font-medium transition-colors"
                >
                    "Search"
                </button>
            </div>

            {move || {
                if searching.get() {
                    view! { <Loading label="Loading history..." /> }.into_view()
                } else if load_failed.get() {
                    view! { <ErrorState message="Failed to load history" /> }.into_view()
                } else {
                    match results.get() {
                        None => view! {
                            <EmptyState
                                icon="🔎"
                                message="Search for a user to see their conversation"
                            />
                        }
                        .into_view(),
                        Some(messages) if messages.is_empty() => view! {
                            <EmptyState
                                icon="💬"
                                message="No conversation found for this user"
                            />
                        }
                        .into_view(),
                        Some(messages) => {
                            let user_id = searched_user.get();
                            messages
                                .into_iter()
                                .map(|msg| view! {
                                    <MessagePreview
                                        message=msg
                                        user_id=user_id.clone()
                                        on_open=open_details
                                    />
                                })
                                .collect_view()
                        }
                    }
                }
            }}

            {move || {
                let restart = restart.clone();
                detail.get().map(|d| view! {
                    <ConversationModal
                        detail=d
                        on_close=move || set_detail.set(None)
                        on_restart=restart
                    />
                })
            }}
        </section>
    }
}

/// One message in the preview list; clicking opens the detail modal.
#[component]
fn MessagePreview(
    message: ConversationMessage,
    user_id: String,
    on_open: Callback<String>,
) -> impl IntoView {
    let (label, label_class) = match message.sender {
        Sender::User => ("👤 User", "text-primary-400"),
        Sender::Bot => ("🤖 Bot", "text-green-400"),
    };

    view! {
        <div
            class="py-3 px-2 -mx-2 border-b border-gray-700 last:border-0
                   cursor-pointer hover:bg-gray-750 rounded"
            on:click=move |_| on_open.call(user_id.clone())
        >
            <div class="flex items-center justify-between">
                <strong class=label_class>{label}</strong>
                <span class="text-xs text-gray-500">
                    {format_optional_date(message.timestamp.as_deref())}
                </span>
            </div>
            <div class="text-sm text-gray-300 truncate mt-1">
                {message.text.clone().unwrap_or_else(|| "Empty message".to_string())}
            </div>
        </div>
    }
}

/// Full transcript modal with status badge and restart action.
#[component]
fn ConversationModal(
    detail: ConversationDetail,
    on_close: impl Fn() + Clone + 'static,
    on_restart: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let on_close_for_x = on_close.clone();
    let on_close_for_footer = on_close;

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg mx-4">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Conversation"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <div class="mb-4 space-y-1">
                    <div class="text-sm text-gray-400">
                        "User: "
                        <span class="text-white">{detail.user_id.clone()}</span>
                    </div>
                    <div class="text-sm text-gray-400">
                        "Status: "
                        <span class="text-xs px-2 py-1 bg-primary-600 text-white rounded-full">
                            {detail.state_label.clone()}
                        </span>
                    </div>
                </div>

                <div class="space-y-3 max-h-96 overflow-y-auto pr-1">
                    {detail.messages.iter().map(|msg| {
                        let (align, bubble) = match msg.sender {
                            Sender::User => ("flex justify-end", "bg-primary-600"),
                            Sender::Bot => ("flex justify-start", "bg-gray-700"),
                        };
                        view! {
                            <div class=align>
                                <div class=format!(
                                    "{} text-white rounded-lg px-3 py-2 max-w-[80%]",
                                    bubble
                                )>
                                    <div class="text-sm">
                                        {msg.text.clone().unwrap_or_else(|| "Empty message".to_string())}
                                    </div>
                                    <div class="text-xs text-gray-300 mt-1">
                                        {format_optional_date(msg.timestamp.as_deref())}
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="flex justify-end space-x-2 mt-6">
                    <button
                        on:click=move |_| on_close_for_footer()
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                               font-medium transition-colors"
                    >
                        "Close"
                    </button>
                    <button
                        on:click=on_restart
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg
                               font-medium transition-colors"
                    >
                        "Restart conversation"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(sender: Sender, text: &str) -> ConversationMessage {
        ConversationMessage {
            sender,
            text: Some(text.to_string()),
            timestamp: None,
        }
    }

    #[test]
    fn detail_preserves_message_order() {
        let messages = vec![
            msg(Sender::User, "oi"),
            msg(Sender::Bot, "olá, quer marcar uma consulta?"),
            msg(Sender::User, "quero"),
        ];
        let detail = ConversationDetail::new(
            "5511999990000".to_string(),
            messages.clone(),
            "agendando".to_string(),
        );
        assert_eq!(detail.messages, messages);
    }

    #[test]
    fn restart_is_a_no_op_without_an_opened_conversation() {
        assert_eq!(restart_target(None), None);
        assert_eq!(restart_target(Some(String::new())), None);
        assert_eq!(
            restart_target(Some("5511999990000".to_string())).as_deref(),
            Some("5511999990000")
        );
    }
}
