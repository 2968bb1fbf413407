//! Leptos wrappers around the pure gate decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view is wrapped in exactly one of these. The outcome is
//! memoized so a refresh that leaves the outcome unchanged does not rebuild
//! the guarded page and drop its local state.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::loading_overlay::LoadingOverlay;
use crate::gate::{GateKind, GateOutcome, decide, decide_fallback};
use crate::session::PortalSession;

/// Gate for login/register/OTP views.
#[component]
pub fn PublicGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let outcome = Memo::new(move |_| decide(GateKind::Public, session.state()));
    move || render_outcome(outcome.get(), &children)
}

/// Gate for the authenticated area.
#[component]
pub fn PrivateGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let outcome = Memo::new(move |_| decide(GateKind::Private, session.state()));
    move || render_outcome(outcome.get(), &children)
}

/// Router fallback for every path without a view.
#[component]
pub fn FallbackGate() -> impl IntoView {
    let session = expect_context::<PortalSession>();
    let outcome = Memo::new(move |_| decide_fallback(session.state()));
    move || match outcome.get() {
        GateOutcome::Loading | GateOutcome::Render => view! { <LoadingOverlay/> }.into_any(),
        GateOutcome::Redirect(path) => redirect_view(path),
    }
}

fn render_outcome(outcome: GateOutcome, children: &ChildrenFn) -> AnyView {
    match outcome {
        GateOutcome::Loading => view! { <LoadingOverlay/> }.into_any(),
        GateOutcome::Render => children().into_any(),
        GateOutcome::Redirect(path) => redirect_view(path),
    }
}

fn redirect_view(path: &'static str) -> AnyView {
    let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
    view! { <Redirect path=path options=options/> }.into_any()
}
