//! Loading Component

use leptos::*;

/// Shown while the list is being fetched
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="text-center py-5">
            <p>"☕ Waking up the server... This may take 30 seconds on the first load."</p>
        </div>
    }
}
