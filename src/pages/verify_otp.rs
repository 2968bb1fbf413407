//! OTP entry page completing a registration.

#[cfg(test)]
#[path = "verify_otp_test.rs"]
mod verify_otp_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::gate::{LOGIN_PATH, RESEND_OTP_PATH};
use crate::net::api::UserApi;
use crate::net::types::OtpRequest;

const OTP_LEN: usize = 6;

/// Keep only digits, capped at `OTP_LEN`.
fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

fn validate_otp_input(code: &str) -> Result<OtpRequest, &'static str> {
    let code = code.trim();
    if code.len() != OTP_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit verification code.");
    }
    Ok(OtpRequest { otp: code.to_owned() })
}

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let api = expect_context::<UserApi>();
    let navigate = use_navigate();

    let code = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_otp_input(&code.get_untracked()) {
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
            match api.verify_otp(&request).await {
                Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
                Err(err) => {
                    log::warn!("otp verification failed: {err}");
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify OTP"</h1>
                <p class="auth-card__subtitle">
                    "Enter the 6-digit verification code that was sent to your email."
                </p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input auth-input--otp"
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        maxlength="6"
                        placeholder="000000"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_otp_input(&event_target_value(&ev)))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Didn't receive a code? "
                    <A href=RESEND_OTP_PATH>"Resend OTP"</A>
                </p>
            </div>
        </div>
    }
}
