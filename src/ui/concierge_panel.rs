//! Concierge chat panel
//!
//! Chat with the simulated Medellín scout. Replies are canned and arrive after
//! a fixed delay; the conversation survives reloads within the tab through
//! `sessionStorage`.

use leptos::prelude::*;

use crate::core::concierge::{ConciergeError, ConciergeMessage, GREETING, Role, prepare_message};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Storage key for the conversation in sessionStorage
#[cfg(not(feature = "ssr"))]
const HISTORY_STORAGE_KEY: &str = "localscout_concierge";

/// Concierge chat panel component
#[component]
pub fn ConciergePanel() -> impl IntoView {
    let messages = RwSignal::new(Vec::<ConciergeMessage>::new());
    let (input_value, set_input_value) = signal(String::new());
    let is_typing = RwSignal::new(false);
    let (error_message, set_error_message) = signal::<Option<String>>(None);

    // Load conversation from sessionStorage on mount
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::concierge::decode_history;
        use leptos::logging::warn;

        Effect::new(move |_| {
            let Some(raw) =
                session_storage().and_then(|s| s.get_item(HISTORY_STORAGE_KEY).ok().flatten())
            else {
                return;
            };
            match decode_history(&raw) {
                Ok(history) => messages.set(history),
                Err(e) => warn!("{e}"),
            }
        });
    }

    let send = move || {
        let pending = is_typing.get_untracked();
        let message = match prepare_message(&input_value.get_untracked(), pending) {
            Ok(message) => message,
            // Enter still submits while the button is disabled
            Err(ConciergeError::ReplyPending) => return,
            Err(e) => {
                set_error_message.set(Some(e.to_string()));
                return;
            }
        };
        set_error_message.set(None);
        set_input_value.set(String::new());

        let question = message.text.clone();
        messages.update(|m| m.push(message));
        persist(messages);
        is_typing.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::concierge::{REPLY_DELAY_MS, reply_to};
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(REPLY_DELAY_MS).await;
                // the panel may be gone by now
                if messages.try_update(|m| m.push(reply_to(&question))).is_some() {
                    persist(messages);
                    is_typing.set(false);
                }
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = question;
        }
    };

    view! {
        <section class="concierge-panel w-full max-w-xl mx-auto rounded-2xl border border-theme bg-theme-primary shadow-lg">
            <header class="px-4 py-3 border-b border-theme">
                <h3 class="text-base font-semibold text-theme-primary">"Ask a local scout"</h3>
            </header>

            <ul class="concierge-messages px-4 py-3 space-y-3 max-h-80 overflow-y-auto" aria-live="polite">
                <li class="concierge-message concierge-message-scout">{GREETING}</li>
                <For
                    each=move || messages.get()
                    key=|message| message.id
                    children=move |message| {
                        let class = match message.role {
                            Role::Traveler => "concierge-message concierge-message-traveler",
                            Role::Concierge => "concierge-message concierge-message-scout",
                        };
                        view! { <li class=class>{message.text}</li> }
                    }
                />
                <Show when=move || is_typing.get()>
                    <li class="concierge-message concierge-message-scout concierge-typing">
                        <span></span><span></span><span></span>
                    </li>
                </Show>
            </ul>

            <form
                class="flex gap-2 px-4 py-3 border-t border-theme"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    class="flex-1 px-3 py-2 rounded-lg border border-theme bg-theme-secondary/30 text-sm"
                    placeholder="Where should I get coffee?"
                    prop:value=move || input_value.get()
                    on:input=move |ev| set_input_value.set(event_target_value(&ev))
                    aria-label="Message the concierge"
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded-lg bg-accent-primary text-white text-sm font-medium disabled:opacity-50"
                    disabled=move || is_typing.get()
                >
                    "Send"
                </button>
            </form>

            {move || {
                error_message
                    .get()
                    .map(|e| view! { <p class="px-4 pb-3 text-xs text-red-500">{e}</p> })
            }}
        </section>
    }
}

/// Save the conversation to sessionStorage
fn persist(messages: RwSignal<Vec<ConciergeMessage>>) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::concierge::encode_history;

        if let Some(storage) = session_storage() {
            let encoded = messages.with_untracked(|m| encode_history(m));
            let _ = storage.set_item(HISTORY_STORAGE_KEY, &encoded);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = messages;
    }
}

#[cfg(not(feature = "ssr"))]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}
