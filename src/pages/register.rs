//! Account registration page. A successful registration continues to OTP entry.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::form::{required, required_email};
use crate::gate::{LOGIN_PATH, VERIFY_OTP_PATH};
use crate::net::api::UserApi;
use crate::net::types::RegisterRequest;

fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = required(username).ok_or("Enter a username.")?;
    let email = required_email(email).ok_or("Enter a valid email address.")?;
    if required(password).is_none() {
        return Err("Enter a password.");
    }
    Ok(RegisterRequest { username, email, password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<UserApi>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&request).await {
                Ok(_) => navigate(VERIFY_OTP_PATH, NavigateOptions::default()),
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        "Register"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Login"</A>
                </p>
            </div>
        </div>
    }
}
