//! Clinic UI
//!
//! Marketing pages and dashboard state-display widgets for a clinic-management
//! product, rendered on the server with Leptos and enhanced with HTMX.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving pages, HTMX fragments and bulk-action posts
//! - **Widgets**: Empty states, loading skeletons and the bulk actions bar
//! - **Chrome**: Navbar, hero/CTA and footer
//! - **Notifications**: Toasts delivered through `HX-Trigger` headers
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`error`]: Server error type
//! - [`notify`]: Toast notifications
//! - [`server`]: Router and handlers
//! - [`telemetry`]: Structured logging setup
//! - [`ui`]: Leptos components and pages

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod notify;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::ui::empty_state::ScenarioHandlers;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Handlers behind the dashboard's empty-state buttons.
    pub empty_actions: ScenarioHandlers,
}

impl AppState {
    /// Wrap a loaded configuration, with the default empty-state handlers.
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            empty_actions: server::empty_actions(),
        }
    }

    /// Replace the empty-state handlers.
    #[must_use]
    pub fn with_empty_actions(mut self, handlers: ScenarioHandlers) -> Self {
        self.empty_actions = handlers;
        self
    }
}
