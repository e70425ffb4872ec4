use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum_test::TestServer;
use clinic_ui::AppState;
use clinic_ui::config::{AppConfig, LogFormat, LoggingConfig, ServerConfig, UiConfig};
use clinic_ui::server::router;
use clinic_ui::ui::bulk_actions::BulkAction;
use clinic_ui::ui::empty_state::{EmptyScenario, ScenarioHandlers};
use clinic_ui::ui::handler::ActionHandler;

fn test_config(bulk_actions: Vec<BulkAction>) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 5,
        },
        ui: UiConfig {
            brand_name: "MediFlow".to_string(),
            static_dir: "static".to_string(),
            bulk_actions,
        },
        logging: LoggingConfig {
            format: LogFormat::Compact,
            filter: "warn".to_string(),
        },
    }
}

fn server_with(bulk_actions: Vec<BulkAction>) -> TestServer {
    let state = AppState::new(Arc::new(test_config(bulk_actions)));
    TestServer::new(router(state)).expect("router should start")
}

fn server() -> TestServer {
    server_with(vec![
        BulkAction::Export,
        BulkAction::Email,
        BulkAction::Tag,
        BulkAction::Delete,
    ])
}

fn toast_header(response: &axum_test::TestResponse) -> Option<serde_json::Value> {
    response
        .maybe_header("hx-trigger")
        .map(|value| serde_json::from_str(value.to_str().unwrap()).unwrap())
}

#[tokio::test]
async fn test_landing_page_renders_chrome() {
    let response = server().get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("MediFlow"));
    assert!(html.contains(r#"id="site-nav""#));
    assert!(html.contains(r#"href="/register""#));
    assert!(html.contains("All rights reserved."));
}

#[tokio::test]
async fn test_dashboard_without_selection_hides_bar() {
    let response = server().get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-skeleton="dashboard""#));
    assert!(html.contains(r#"<div id="bulk-actions"></div>"#));
    assert!(!html.contains("data-bulk-bar"));
    assert!(!html.contains("data-bulk-action"));
}

#[tokio::test]
async fn test_dashboard_with_selection_shows_configured_controls() {
    let response = server_with(vec![BulkAction::Export, BulkAction::Delete])
        .get("/dashboard")
        .add_query_param("selected", 3)
        .await;

    let html = response.text();
    assert!(html.contains("3 items selected"));
    assert_eq!(html.matches("data-bulk-action=").count(), 3);
    assert!(html.contains(r#"hx-post="/api/bulk/export""#));
    assert!(!html.contains(r#"hx-post="/api/bulk/email""#));
}

#[tokio::test]
async fn test_export_returns_toast_header() {
    let response = server()
        .post("/api/bulk/export")
        .form(&[("count", "7")])
        .await;

    response.assert_status_ok();
    let trigger = toast_header(&response).expect("export raises a toast");
    let message = trigger["toast"][0]["message"].as_str().unwrap();
    assert!(message.contains('7'));
    assert_eq!(
        trigger["toast"][0]["description"],
        "Your export will be ready shortly."
    );
    // Selection is untouched, so the bar stays.
    assert!(response.text().contains("7 items selected"));
}

#[tokio::test]
async fn test_email_and_tag_toasts() {
    let server = server();

    let email = server.post("/api/bulk/email").form(&[("count", "1")]).await;
    let trigger = toast_header(&email).unwrap();
    assert_eq!(trigger["toast"][0]["message"], "Email sent to 1 recipients");
    assert!(email.text().contains("1 item selected"));

    let tag = server.post("/api/bulk/tag").form(&[("count", "4")]).await;
    let trigger = toast_header(&tag).unwrap();
    assert_eq!(trigger["toast"][0]["message"], "Tags applied to 4 records");
}

#[tokio::test]
async fn test_delete_and_clear_hide_bar_without_toast() {
    let server = server();

    for action in ["delete", "clear"] {
        let response = server
            .post(&format!("/api/bulk/{action}"))
            .form(&[("count", "5")])
            .await;

        response.assert_status_ok();
        assert!(toast_header(&response).is_none());
        assert_eq!(response.text(), "");
    }
}

#[tokio::test]
async fn test_empty_selection_is_rejected() {
    let response = server()
        .post("/api/bulk/export")
        .form(&[("count", "0")])
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    assert!(toast_header(&response).is_none());
}

#[tokio::test]
async fn test_unknown_or_disabled_action_is_not_found() {
    let server = server_with(vec![BulkAction::Export]);

    server
        .post("/api/bulk/archive")
        .form(&[("count", "1")])
        .expect_failure()
        .await
        .assert_status_not_found();

    server
        .post("/api/bulk/email")
        .form(&[("count", "1")])
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_navbar_partial_toggles() {
    let server = server();

    let open = server
        .get("/partials/navbar")
        .add_query_param("menu", "open")
        .await
        .text();
    assert!(open.contains("data-mobile-menu"));
    assert!(open.contains("menu=closed"));

    let closed = server.get("/partials/navbar").await.text();
    assert!(!closed.contains("data-mobile-menu"));
    assert!(closed.contains("menu=open"));
}

#[tokio::test]
async fn test_search_partial_escapes_query() {
    let html = server()
        .get("/partials/search")
        .add_query_param("q", "<script>xyz</script>")
        .await
        .text();

    assert!(html.contains("No results found"));
    assert!(html.contains("xyz"));
    assert!(!html.contains("<script>xyz"));
}

#[tokio::test]
async fn test_table_skeleton_partial_clamps() {
    let server = server();

    let html = server
        .get("/partials/table-skeleton")
        .add_query_param("rows", 0)
        .add_query_param("columns", 2)
        .await
        .text();
    assert_eq!(html.matches(r#"data-skeleton="header-cell""#).count(), 2);
    assert_eq!(html.matches(r#"data-skeleton="table-row""#).count(), 0);

    let html = server
        .get("/partials/table-skeleton")
        .add_query_param("rows", 500)
        .add_query_param("columns", 1)
        .await
        .text();
    assert_eq!(html.matches(r#"data-skeleton="table-row""#).count(), 50);
    assert_eq!(html.matches(r#"data-skeleton="text-pair""#).count(), 0);
}

#[tokio::test]
async fn test_dashboard_partial_and_health() {
    let server = server();

    let html = server.get("/partials/dashboard").await.text();
    assert!(html.contains("No patients yet"));

    let health = server.get("/health").await;
    health.assert_status_ok();
    health.assert_json(&serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_navbar_partial_rejects_unknown_state() {
    server()
        .get("/partials/navbar")
        .add_query_param("menu", "ajar")
        .expect_failure()
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_empty_state_button_runs_its_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let handlers = ScenarioHandlers::new().with(
        EmptyScenario::Patients,
        ActionHandler::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let state = AppState::new(Arc::new(test_config(vec![]))).with_empty_actions(handlers);
    let server = TestServer::new(router(state)).unwrap();

    // The rendered button points at the route that runs the handler.
    let html = server.get("/partials/dashboard").await.text();
    assert!(html.contains(r#"hx-post="/api/empty/patients""#));
    assert!(!html.contains(r#"hx-post="/api/empty/clinics""#));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    server
        .post("/api/empty/patients")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    server.post("/api/empty/patients").await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_state_without_button_is_not_found() {
    let server = server();

    for scenario in ["reports", "search", "invoices"] {
        server
            .post(&format!("/api/empty/{scenario}"))
            .expect_failure()
            .await
            .assert_status_not_found();
    }
}

#[tokio::test]
async fn test_skeleton_partials() {
    let server = server();

    for kind in [
        "stat-card",
        "patient-card",
        "appointment",
        "page-header",
        "quick-view",
        "shimmer",
        "dashboard",
    ] {
        let html = server.get(&format!("/partials/skeleton/{kind}")).await.text();
        assert!(
            html.contains(&format!(r#"data-skeleton="{kind}""#)),
            "{kind} fragment missing its marker"
        );
    }

    server
        .get("/partials/skeleton/carousel")
        .expect_failure()
        .await
        .assert_status_not_found();
}
