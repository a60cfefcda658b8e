use std::path::PathBuf;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use starhop_lib::{Catalog, Navigator, SystemRecord, LY_IN_METERS};
use starhop_service::{build_router, AppState};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal_systems.json")
}

fn fixture_server() -> TestServer {
    let state = AppState::load(fixture_path()).expect("fixture loads");
    TestServer::new(build_router(state)).expect("server starts")
}

/// Sol, Alpha and Beta on a line 1e16 m apart, with Gamma far away.
fn sol_alpha_beta_server() -> TestServer {
    let catalog = Catalog::build(vec![
        SystemRecord::new(1, "Sol", 0.0, 0.0, 0.0),
        SystemRecord::new(2, "Alpha", 1.0e16, 0.0, 0.0),
        SystemRecord::new(3, "Beta", 2.0e16, 0.0, 0.0),
        SystemRecord::new(4, "Gamma", 5.0e18, 5.0e18, 5.0e18),
    ])
    .expect("catalog builds");
    let state = AppState::from_navigator(Navigator::new(catalog));
    TestServer::new(build_router(state)).expect("server starts")
}

#[tokio::test]
async fn route_between_fixture_systems() {
    let server = fixture_server();
    let response = server
        .get("/route")
        .add_query_param("start", "Nod")
        .add_query_param("destination", "D:2NAS")
        .add_query_param("jump_range", "10")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "route": ["Nod", "Brana", "H:2L2S", "D:2NAS"] }));
}

#[tokio::test]
async fn jump_range_defaults_to_one_hundred() {
    let server = fixture_server();
    let response = server
        .get("/route")
        .add_query_param("start", "Nod")
        .add_query_param("destination", "BetaTest")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let route = body["route"].as_array().expect("route array");
    assert_eq!(route.first(), Some(&json!("Nod")));
    assert_eq!(route.last(), Some(&json!("BetaTest")));
}

#[tokio::test]
async fn sol_to_beta_takes_two_hops_at_short_range() {
    let server = sol_alpha_beta_server();
    let response = server
        .get("/route")
        .add_query_param("start", "Sol")
        .add_query_param("destination", "Beta")
        .add_query_param("jump_range", "1.5")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "route": ["Sol", "Alpha", "Beta"] }));
}

#[tokio::test]
async fn same_start_and_destination() {
    let server = sol_alpha_beta_server();
    let response = server
        .get("/route")
        .add_query_param("start", "Sol")
        .add_query_param("destination", "Sol")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "route": ["Sol"] }));
}

#[tokio::test]
async fn unknown_system_answers_with_error_body() {
    let server = sol_alpha_beta_server();
    let response = server
        .get("/route")
        .add_query_param("start", "Sol")
        .add_query_param("destination", "Nonexistent")
        .add_query_param("jump_range", "5")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "System not found" }));
}

#[tokio::test]
async fn isolated_destination_has_no_route() {
    let server = sol_alpha_beta_server();
    let response = server
        .get("/route")
        .add_query_param("start", "Sol")
        .add_query_param("destination", "Gamma")
        .add_query_param("jump_range", "5")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "No route found" }));
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let server = fixture_server();

    let response = server
        .get("/route")
        .add_query_param("start", "Nod")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing parameters" }));

    let response = server.get("/route").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing parameters" }));

    let response = server
        .get("/route")
        .add_query_param("start", "")
        .add_query_param("destination", "Brana")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Missing parameters" }));
}

#[tokio::test]
async fn invalid_jump_range_is_rejected() {
    let server = fixture_server();
    for raw in ["abc", "0", "-10"] {
        let response = server
            .get("/route")
            .add_query_param("start", "Nod")
            .add_query_param("destination", "Brana")
            .add_query_param("jump_range", raw)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid jump range" }));
    }
}

#[tokio::test]
async fn request_id_is_echoed() {
    let server = fixture_server();
    let response = server
        .get("/health/live")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("req-42"),
        )
        .await;

    response.assert_status_ok();
    let header = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(header.as_deref(), Some("req-42"));
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let server = fixture_server();
    let response = server.get("/health/live").await;

    let header = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("generated request id");
    assert!(uuid::Uuid::parse_str(&header).is_ok());
}

#[tokio::test]
async fn readiness_reports_loaded_systems() {
    let server = fixture_server();
    let response = server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["systems_loaded"], 8);
}

#[tokio::test]
async fn readiness_fails_on_empty_catalog() {
    let catalog = Catalog::build(Vec::new()).expect("empty catalog builds");
    let state = AppState::from_navigator(Navigator::new(catalog));
    let server = TestServer::new(build_router(state)).expect("server starts");

    let response = server.get("/health/ready").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let response = server.get("/health/live").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn slow_queries_time_out() {
    // A dense cluster where every system neighbours every other one keeps
    // the exploration busy long past a zero timeout.
    let mut rng = StdRng::seed_from_u64(0x2545_f491);
    let extent = 10.0 * LY_IN_METERS;
    let mut records: Vec<SystemRecord> = (0..3_000)
        .map(|i| {
            SystemRecord::new(
                i,
                format!("S-{i}"),
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
                rng.gen_range(0.0..extent),
            )
        })
        .collect();
    records.push(SystemRecord::new(
        10_000,
        "Far",
        1.0e19,
        1.0e19,
        1.0e19,
    ));
    let catalog = Catalog::build(records).expect("catalog builds");
    let state = AppState::from_navigator(Navigator::new(catalog))
        .with_query_timeout(Some(Duration::ZERO));
    let server = TestServer::new(build_router(state)).expect("server starts");

    let response = server
        .get("/route")
        .add_query_param("start", "S-0")
        .add_query_param("destination", "Far")
        .add_query_param("jump_range", "50")
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    response.assert_json(&json!({ "error": "Route calculation timed out" }));
}
