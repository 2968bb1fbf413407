//! Full-screen loader shown while the initial identity check is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay" role="status" aria-live="polite">
            <div class="loading-overlay__spinner"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
