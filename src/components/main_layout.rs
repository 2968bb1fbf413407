//! Chrome around every authenticated view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting the layout re-validates the session in the background, and the
//! logout button ends the server session. Neither touches `loading`, so the
//! full-screen loader never reappears; `PrivateGate` performs the redirect
//! once the refreshed state turns anonymous.

use leptos::prelude::*;

use crate::net::api::UserApi;
use crate::session::PortalSession;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let api = expect_context::<UserApi>();
    let busy = RwSignal::new(false);

    let mount_session = session.clone();
    leptos::task::spawn_local(async move {
        mount_session.refresh_auth().await;
    });

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        let session = session.clone();
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.logout().await {
                Ok(_) => session.refresh_auth().await,
                Err(err) => {
                    log::error!("logout failed: {err}");
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="portal-layout">
            <header class="portal-layout__header">
                <span class="portal-layout__title">"Portal Admin"</span>
                <button class="portal-layout__logout" on:click=on_logout disabled=move || busy.get()>
                    "Logout"
                </button>
            </header>
            <main class="portal-layout__content">{children()}</main>
        </div>
    }
}
