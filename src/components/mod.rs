//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session store from Leptos context; pages are wrapped
//! in a gate before they render.

pub mod loading_overlay;
pub mod main_layout;
pub mod route_gate;
