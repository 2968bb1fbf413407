//! Authenticated landing view.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Dashboard"</h1>
            <p>"You are signed in to the portal administration area."</p>
        </section>
    }
}
