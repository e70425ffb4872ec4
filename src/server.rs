use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, Query, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Datelike;
use leptos::prelude::*;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::notify::{ToastQueue, hx_trigger};
use crate::ui::app::{DashboardContent, DashboardPage, LandingPage};
use crate::ui::bulk_actions::{BulkAction, BulkActionSet, BulkActionsBar};
use crate::ui::empty_state::{EmptyScenario, EmptySearch, ScenarioHandlers};
use crate::ui::handler::ActionHandler;
use crate::ui::marketing::{MenuState, Navbar};
use crate::ui::render_to_string;
use crate::ui::skeleton::{
    AppointmentSkeleton, DashboardSkeleton, PageHeaderSkeleton, PatientCardSkeleton,
    QuickViewSkeleton, ShimmerLoader, StatCardSkeleton, TableSkeleton,
};

/// Upper bound on rows a table skeleton fragment may request.
pub const MAX_SKELETON_ROWS: usize = 50;
/// Upper bound on columns a table skeleton fragment may request.
pub const MAX_SKELETON_COLUMNS: usize = 12;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.server.addr();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::from)?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = ServeDir::new(&state.config.ui.static_dir);

    Router::new()
        .route("/", get(landing_page))
        .route("/dashboard", get(dashboard_page))
        .route("/health", get(health))
        // HTMX fragments
        .route("/partials/dashboard", get(dashboard_partial))
        .route("/partials/navbar", get(navbar_partial))
        .route("/partials/search", get(search_partial))
        .route("/partials/table-skeleton", get(table_skeleton_partial))
        .route("/partials/skeleton/{kind}", get(skeleton_partial))
        .route("/api/bulk/{action}", post(bulk_action))
        .route("/api/empty/{scenario}", post(empty_action))
        .nest_service("/static", static_dir)
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handlers the server wires into the bulk bar for the configured actions.
///
/// The crate has no data layer, so each handler only records the request.
pub fn server_actions(enabled: &[BulkAction]) -> BulkActionSet {
    let handler = |action: BulkAction| {
        ActionHandler::new(move || {
            info!(name: "bulk.handler.run", action = %action, "Bulk handler run");
        })
    };

    enabled
        .iter()
        .fold(BulkActionSet::new(handler(BulkAction::Clear)), |set, action| {
            match action {
                BulkAction::Export => set.on_export(handler(BulkAction::Export)),
                BulkAction::Email => set.on_email(handler(BulkAction::Email)),
                BulkAction::Tag => set.on_tag(handler(BulkAction::Tag)),
                BulkAction::Delete => set.on_delete(handler(BulkAction::Delete)),
                BulkAction::Clear => set,
            }
        })
}

/// Handlers behind the dashboard's empty-state buttons.
///
/// As with [`server_actions`], each one only records the request.
pub fn empty_actions() -> ScenarioHandlers {
    EmptyScenario::ALL
        .into_iter()
        .filter(|scenario| scenario.action_label().is_some())
        .fold(ScenarioHandlers::new(), |handlers, scenario| {
            handlers.with(
                scenario,
                ActionHandler::new(move || {
                    info!(name: "empty.handler.run", scenario = %scenario, "Empty-state handler run");
                }),
            )
        })
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Landing page.
async fn landing_page(State(state): State<AppState>) -> Html<String> {
    let brand = state.config.ui.brand_name.clone();
    let year = current_year();

    Html(render_to_string(move || {
        view! { <LandingPage brand=brand year=year /> }
    }))
}

#[derive(Debug, Deserialize)]
struct DashboardQuery {
    #[serde(default)]
    selected: usize,
}

/// GET /dashboard - Dashboard shell with skeleton and bulk bar.
async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let brand = state.config.ui.brand_name.clone();
    let actions = server_actions(&state.config.ui.bulk_actions);

    Html(render_to_string(move || {
        view! { <DashboardPage brand=brand selected=query.selected actions=actions /> }
    }))
}

/// GET /health - Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragments
// ─────────────────────────────────────────────────────────────────────────────

/// GET /partials/dashboard - Dashboard body.
async fn dashboard_partial(State(state): State<AppState>) -> Html<String> {
    let handlers = state.empty_actions.clone();

    Html(render_to_string(move || {
        view! { <DashboardContent handlers=handlers /> }
    }))
}

#[derive(Debug, Deserialize)]
struct NavbarQuery {
    #[serde(default)]
    menu: MenuState,
}

/// GET /partials/navbar?menu=open|closed - Navbar in the requested state.
async fn navbar_partial(
    State(state): State<AppState>,
    Query(query): Query<NavbarQuery>,
) -> Html<String> {
    let brand = state.config.ui.brand_name.clone();

    Html(render_to_string(move || {
        view! { <Navbar brand=brand menu=query.menu /> }
    }))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// GET /partials/search?q= - Empty search result.
async fn search_partial(Query(query): Query<SearchQuery>) -> Html<String> {
    Html(render_to_string(move || view! { <EmptySearch query=query.q /> }))
}

#[derive(Debug, Deserialize)]
struct TableQuery {
    rows: Option<usize>,
    columns: Option<usize>,
}

/// GET /partials/table-skeleton?rows=&columns= - Table placeholder.
async fn table_skeleton_partial(Query(query): Query<TableQuery>) -> Html<String> {
    let rows = query.rows.unwrap_or(5).min(MAX_SKELETON_ROWS);
    let columns = query.columns.unwrap_or(5).clamp(2, MAX_SKELETON_COLUMNS);

    Html(render_to_string(move || {
        view! { <TableSkeleton rows=rows columns=columns /> }
    }))
}

/// GET /partials/skeleton/{kind} - Named loading placeholder.
async fn skeleton_partial(Path(kind): Path<String>) -> Result<Html<String>, AppError> {
    let html = match kind.as_str() {
        "stat-card" => render_to_string(|| view! { <StatCardSkeleton /> }),
        "patient-card" => render_to_string(|| view! { <PatientCardSkeleton /> }),
        "appointment" => render_to_string(|| view! { <AppointmentSkeleton /> }),
        "page-header" => render_to_string(|| view! { <PageHeaderSkeleton /> }),
        "quick-view" => render_to_string(|| view! { <QuickViewSkeleton /> }),
        "shimmer" => render_to_string(|| view! { <ShimmerLoader class="h-24 w-full" /> }),
        "dashboard" => render_to_string(|| view! { <DashboardSkeleton /> }),
        _ => return Err(AppError::UnknownSkeleton(kind)),
    };

    Ok(Html(html))
}

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct BulkForm {
    count: usize,
}

/// POST /api/bulk/{action} - Run a bulk action and re-render the bar.
///
/// Toasts travel back in the `HX-Trigger` header. Delete and Clear hand the
/// selection back as empty, so the response body is empty and the bar goes
/// away. An empty selection is rejected: the bar offers no controls then.
async fn bulk_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Form(form): Form<BulkForm>,
) -> Result<Response, AppError> {
    let action: BulkAction = action.parse()?;
    let actions = server_actions(&state.config.ui.bulk_actions);
    if !actions.capabilities().contains(action) {
        return Err(AppError::ActionUnavailable(action));
    }
    if form.count == 0 {
        return Err(AppError::EmptySelection(action));
    }

    let queue = ToastQueue::new();
    actions.activate(action, form.count, &queue);

    let remaining = if action.resets_selection() { 0 } else { form.count };
    let body = render_to_string(move || {
        view! { <BulkActionsBar selected_count=remaining actions=actions /> }
    });

    let mut response = Html(body).into_response();
    match hx_trigger(&queue.drain()) {
        Ok(Some(payload)) => match HeaderValue::from_str(&payload) {
            Ok(value) => {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static("hx-trigger"), value);
            }
            Err(e) => warn!(name: "toast.header.invalid", error = %e, "Dropping toasts"),
        },
        Ok(None) => {}
        Err(e) => warn!(name: "toast.encode.failed", error = %e, "Dropping toasts"),
    }

    Ok(response)
}

/// POST /api/empty/{scenario} - Run an empty-state action.
///
/// The button swaps nothing, so success is an empty 204.
async fn empty_action(
    State(state): State<AppState>,
    Path(scenario): Path<String>,
) -> Result<StatusCode, AppError> {
    let scenario: EmptyScenario = scenario.parse()?;
    state.empty_actions.activate(scenario)?;
    Ok(StatusCode::NO_CONTENT)
}
