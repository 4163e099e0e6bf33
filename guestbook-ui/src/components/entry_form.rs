//! Entry Form Component
//!
//! Sign the guestbook, or update the entry being edited.

use leptos::*;

use crate::state::global::GuestbookState;

/// Name + message form
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_context::<GuestbookState>().expect("GuestbookState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(state.submit());
    };

    let editing = move || state.editing_id.get().is_some();

    view! {
        <form on:submit=on_submit class="mb-8 space-y-3">
            <input
                type="text"
                placeholder="Your Name"
                required=true
                prop:value=move || state.name.get()
                on:input=move |ev| state.name.set(event_target_value(&ev))
                class="block w-full p-2 border rounded"
            />
            <textarea
                placeholder="Leave a message..."
                required=true
                prop:value=move || state.message.get()
                on:input=move |ev| state.message.set(event_target_value(&ev))
                class="block w-full p-2 border rounded min-h-[80px]"
            />

            <button type="submit" class="px-4 py-2 rounded bg-gray-800 text-white">
                {move || if editing() { "Update Entry" } else { "Sign Guestbook" }}
            </button>

            // Cancel must not submit the form
            <Show when=editing>
                <button
                    type="button"
                    on:click=move |_| state.cancel_edit()
                    class="ml-3 px-4 py-2 rounded border"
                >
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
