//! App Root Component
//!
//! Provides the page state and triggers the initial fetch.

use leptos::*;

use crate::components::{EntryForm, EntryList};
use crate::state::global::{provide_guestbook_state, GuestbookState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_guestbook_state();

    let state = use_context::<GuestbookState>().expect("GuestbookState not found");

    // Initial load, once per mount
    spawn_local(state.refresh());

    view! {
        <div class="max-w-xl mx-auto p-5 font-sans">
            <h2 class="text-2xl font-bold mb-4">"Guestbook"</h2>

            <EntryForm />

            <hr class="my-6" />

            <EntryList />
        </div>
    }
}
