//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::main_layout::MainLayout;
use crate::components::route_gate::{FallbackGate, PrivateGate, PublicGate};
use crate::config::PortalConfig;
use crate::net::api::UserApi;
use crate::pages::{
    home::HomePage, login::LoginPage, register::RegisterPage, resend_otp::ResendOtpPage,
    verify_otp::VerifyOtpPage,
};
use crate::session::PortalSession;
use crate::session::identity::HttpIdentity;
use crate::session::race::BrowserTimer;

/// Root application component.
///
/// Owns the single session store: it is created here, provided to every
/// gate and page through context, and its initial identity check is
/// started once on mount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_build_env();
    let api = UserApi::new(config.api_base_url.clone());
    let session = PortalSession::new(HttpIdentity::new(api.clone()), BrowserTimer, config.identity_timeout);

    provide_context(api);
    provide_context(session.clone());

    leptos::task::spawn_local(async move {
        session.check_auth().await;
    });

    view! {
        <Title text="Portal Admin"/>

        <Router>
            <Routes fallback=|| view! { <FallbackGate/> }>
                <Route path=StaticSegment("login") view=|| view! { <PublicGate><LoginPage/></PublicGate> }/>
                <Route path=StaticSegment("register") view=|| view! { <PublicGate><RegisterPage/></PublicGate> }/>
                <Route path=StaticSegment("verify-otp") view=|| view! { <PublicGate><VerifyOtpPage/></PublicGate> }/>
                <Route path=StaticSegment("resend-otp") view=|| view! { <PublicGate><ResendOtpPage/></PublicGate> }/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <PrivateGate><MainLayout><HomePage/></MainLayout></PrivateGate> }
                />
            </Routes>
        </Router>
    }
}
