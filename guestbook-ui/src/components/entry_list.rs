//! Entry List Component
//!
//! Projection of the list phase: loading, error, empty, or entries.

use leptos::*;

use crate::components::Loading;
use crate::state::global::{Entry, GuestbookState, Phase};

/// List of guestbook entries in server order
#[component]
pub fn EntryList() -> impl IntoView {
    let state = use_context::<GuestbookState>().expect("GuestbookState not found");

    move || match state.phase.get() {
        Phase::Loading => view! { <Loading /> }.into_view(),
        Phase::Error(message) => view! {
            <p class="text-orange-500">{message}</p>
        }
        .into_view(),
        Phase::Ready => view! {
            <div>
                <Show when=move || state.entries.with(|entries| entries.is_empty())>
                    <p>"No entries yet. Be the first!"</p>
                </Show>
                <For
                    each=move || state.entries.get()
                    key=|entry| entry.id.clone()
                    children=move |entry| view! { <EntryRow entry=entry /> }
                />
            </div>
        }
        .into_view(),
    }
}

#[component]
fn EntryRow(entry: Entry) -> impl IntoView {
    let state = use_context::<GuestbookState>().expect("GuestbookState not found");

    let id = entry.id.clone();
    let Entry { name, message, .. } = entry.clone();

    view! {
        <div class="border-b border-gray-300 py-4">
            <strong>{name}</strong>
            <p class="whitespace-pre-wrap">{message}</p>
            <button on:click=move |_| state.start_edit(&entry) class="mr-3">
                "Edit"
            </button>
            <button
                on:click=move |_| spawn_local(state.delete(id.clone()))
                class="text-red-600"
            >
                "Delete"
            </button>
        </div>
    }
}
