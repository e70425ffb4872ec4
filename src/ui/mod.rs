//! UI components and page layouts.
//!
//! Leptos components rendered on the server and enhanced with HTMX.
//!
//! # Structure
//!
//! - [`components`]: ShadCN-style building blocks and the icon registry
//! - [`empty_state`]: Empty-state primitive and preconfigured scenarios
//! - [`skeleton`]: Loading placeholders
//! - [`bulk_actions`]: Selection toolbar
//! - [`marketing`]: Navbar, hero/CTA and footer
//! - [`app`]: Full pages and HTMX fragments

pub mod app;
pub mod bulk_actions;
pub mod components;
pub mod empty_state;
pub mod handler;
pub mod marketing;
pub mod skeleton;

use leptos::prelude::*;

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render_to_string<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
