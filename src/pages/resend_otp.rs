//! Page requesting a fresh OTP for a pending registration.
//!
//! On success the confirmation stays visible briefly before the page moves
//! on to OTP entry.

#[cfg(test)]
#[path = "resend_otp_test.rs"]
mod resend_otp_test;

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::form::required_email;
use crate::gate::{LOGIN_PATH, VERIFY_OTP_PATH};
use crate::net::api::UserApi;
use crate::net::types::ResendOtpRequest;
use crate::session::race::{BrowserTimer, Timer};

const CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

fn validate_resend_input(email: &str) -> Result<ResendOtpRequest, &'static str> {
    let email = required_email(email).ok_or("Enter a valid email address.")?;
    Ok(ResendOtpRequest { email })
}

#[component]
pub fn ResendOtpPage() -> impl IntoView {
    let api = expect_context::<UserApi>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_resend_input(&email.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        info.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.resend_otp(&request).await {
                Ok(reply) => {
                    info.set(Some(reply.message_or("OTP has been resent successfully!")));
                    email.set(String::new());
                    BrowserTimer.sleep(CONFIRMATION_DELAY).await;
                    navigate(VERIFY_OTP_PATH, NavigateOptions::default());
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
                <h1>"Resend OTP"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || info.get().is_some()>
                    <p class="auth-message">{move || info.get().unwrap_or_default()}</p>
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
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Resend OTP"
                    </button>
                </form>
                <p class="auth-card__footer">
                    <A href=LOGIN_PATH>"Back to login"</A>
                </p>
            </div>
        </div>
    }
}
