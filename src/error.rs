//! Server-side errors.
//!
//! Components never fail; precondition violations are clamped where they
//! occur. Errors only arise at the HTTP and startup boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::ui::bulk_actions::BulkAction;
use crate::ui::empty_state::EmptyScenario;

/// Errors surfaced by the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Path segment did not name a bulk action.
    #[error("unknown bulk action `{0}`")]
    UnknownAction(String),

    /// The page did not offer this action.
    #[error("bulk action `{0}` is not available here")]
    ActionUnavailable(BulkAction),

    /// Bulk action posted for an empty selection.
    #[error("bulk action `{0}` needs at least one selected item")]
    EmptySelection(BulkAction),

    /// Path segment did not name an empty-state scenario.
    #[error("unknown empty-state scenario `{0}`")]
    UnknownScenario(String),

    /// The scenario renders no action button, or none was wired up.
    #[error("empty state `{0}` has no action")]
    NoEmptyAction(EmptyScenario),

    /// Path segment did not name a skeleton.
    #[error("unknown skeleton `{0}`")]
    UnknownSkeleton(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Socket or file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownAction(_)
            | Self::ActionUnavailable(_)
            | Self::UnknownScenario(_)
            | Self::NoEmptyAction(_)
            | Self::UnknownSkeleton(_) => StatusCode::NOT_FOUND,
            Self::EmptySelection(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(name: "request.failed", error = %self, "Request failed");
        } else {
            tracing::debug!(name: "request.rejected", error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
