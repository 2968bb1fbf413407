//! Login page with email + password.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server answers a successful login by setting the session cookie. The
//! page then refreshes the session store so `PrivateGate` lets the user
//! through, and navigates home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::form::{required, required_email};
use crate::gate::{HOME_PATH, REGISTER_PATH};
use crate::net::api::UserApi;
use crate::net::types::LoginRequest;
use crate::session::PortalSession;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = required_email(email).ok_or("Enter a valid email address.")?;
    if required(password).is_none() {
        return Err("Enter your password.");
    }
    Ok(LoginRequest { email, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let api = expect_context::<UserApi>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let session = session.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&request).await {
                Ok(reply) => {
                    log::info!("{}", reply.message_or("Login successful"));
                    session.refresh_auth().await;
                    navigate(HOME_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=REGISTER_PATH>"Register"</A>
                </p>
            </div>
        </div>
    }
}
